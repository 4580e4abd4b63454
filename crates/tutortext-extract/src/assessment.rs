//! Assessment-result extraction: strengths, recommendations, description.

use std::sync::LazyLock;

use regex::Regex;

// Labeled strengths section: a "strengths" heading followed by one or more
// newline-terminated bullet lines.
static STRENGTHS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:strengths|key strengths)[:\s]*\n((?:\s*[*-][^\n]*\n)+)").unwrap()
});

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*-]\s*([^\n]+)").unwrap());

// Single-digit numbered items, `N.` or `N)`, anywhere in the text.
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\d\.|\d\))\s*([^\n]+)").unwrap());

// First newline followed by a list-ish marker; everything before it is the
// free-text description.
static LIST_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*[*\d.-]").unwrap());

/// Extract strength bullet points.
///
/// Prefers a labeled `strengths` / `key strengths` section; the captured
/// block is split on every `*` and `-` character, which also splits
/// hyphenated words — inherited behavior, kept. Without a labeled section,
/// falls back to the first five bullet lines anywhere in the text.
pub fn extract_strengths(text: &str) -> Vec<String> {
    if let Some(caps) = STRENGTHS_SECTION.captures(text) {
        if let Some(block) = caps.get(1) {
            return block
                .as_str()
                .split(['*', '-'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }
    }

    BULLET
        .captures_iter(text)
        .take(5)
        .map(|caps| caps[1].trim().to_owned())
        .collect()
}

/// Extract all numbered recommendation items, in source order, uncapped.
pub fn extract_recommendations(text: &str) -> Vec<String> {
    NUMBERED_ITEM
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_owned())
        .collect()
}

/// Extract the free-text description preceding the first bulleted or
/// numbered list. `None` when nothing remains after trimming.
pub fn extract_description(text: &str) -> Option<String> {
    let head = LIST_BOUNDARY
        .find(text)
        .map_or(text, |m| &text[..m.start()]);
    let head = head.trim();
    if head.is_empty() {
        None
    } else {
        Some(head.to_owned())
    }
}
