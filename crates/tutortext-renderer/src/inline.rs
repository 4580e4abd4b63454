//! Inline span rewriting: emphasis, inline code, stray heading markers.
//!
//! Applied to the text of each classified block (headings, list items,
//! blockquote lines, table cells, plain lines) after escaping. Pass order is
//! load-bearing: double-delimiter emphasis runs before single-delimiter so the
//! paired markers never double-process.

use std::sync::LazyLock;

use regex::Regex;

// First `#{1,6}` run followed by whitespace, away from line start. Stripping
// (not promoting) these is a deliberate asymmetry inherited from the legacy
// formatter.
static STRAY_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s+").unwrap());

static BOLD_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static BOLD_UNDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_UNDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Rewrite inline markup within a single (already escaped) text span.
pub fn rewrite(text: &str) -> String {
    let text = STRAY_HEADING.replace(text, "");
    let text = BOLD_STAR.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_STAR.replace_all(&text, "<em>$1</em>");
    let text = BOLD_UNDER.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_UNDER.replace_all(&text, "<em>$1</em>");
    INLINE_CODE.replace_all(&text, "<code>$1</code>").into_owned()
}
