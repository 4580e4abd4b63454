//! Visual presentation helpers for tutor responses.
//!
//! Pure text transforms layered on top of rendering for the visual tutor:
//! concept tagging, key-sentence highlighting, and step-list conversion.
//! Each transform skips input that already carries its marker class, so
//! pre-formatted responses pass through untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static CONCEPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:data structure|hash map|linked list|big O|array|variable|function|method|class|object|inheritance|recursion|iteration|loop|algorithm|stack|queue|tree|graph|sorting|searching)\b",
    )
    .unwrap()
});

// Not word-bound: a phrase inside a longer word still triggers, so
// "unimportant" highlights from "important" onwards. Inherited behavior.
static KEY_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:important|key concept|remember|note that|crucial|essential|fundamental|primary|critical)[^.!?]*[.!?]",
    )
    .unwrap()
});

static STEP_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\d+\.\s+[^\n]+\n?)+").unwrap());
static STEP_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s+").unwrap());

/// Apply all visual enhancements: concepts, highlights, then step lists.
#[must_use]
pub fn enhance(text: &str) -> String {
    let text = annotate_concepts(text);
    let text = highlight_key_sentences(&text);
    convert_step_lists(&text)
}

/// Wrap known programming terms in `<span class="concept">` markers.
///
/// Word-bound and case-insensitive; a single alternation pass so inserted
/// markup is never rewritten. No-op when the text already contains concept
/// markers.
#[must_use]
pub fn annotate_concepts(text: &str) -> String {
    if text.contains(r#"class="concept""#) {
        return text.to_owned();
    }
    CONCEPT
        .replace_all(text, r#"<span class="concept">${0}</span>"#)
        .into_owned()
}

/// Wrap sentences that open with a signal phrase ("important", "remember",
/// ...) in `<span class="highlight">` markers, up to the closing `.`, `!`
/// or `?`. No-op when highlight markers are already present.
#[must_use]
pub fn highlight_key_sentences(text: &str) -> String {
    if text.contains(r#"class="highlight""#) {
        return text.to_owned();
    }
    KEY_SENTENCE
        .replace_all(text, r#"<span class="highlight">${0}</span>"#)
        .into_owned()
}

/// Rewrite runs of `N. ...` lines into a `<ul class="steps">` list.
///
/// No-op when the text already contains a steps list.
#[must_use]
pub fn convert_step_lists(text: &str) -> String {
    if text.contains(r#"class="steps""#) {
        return text.to_owned();
    }
    STEP_RUN
        .replace_all(text, |caps: &Captures<'_>| {
            let items: String = STEP_MARKER
                .split(&caps[0])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| format!("<li>{s}</li>"))
                .collect();
            format!(r#"<ul class="steps">{items}</ul>"#)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_concepts() {
        assert_eq!(
            annotate_concepts("An array is ordered"),
            r#"An <span class="concept">array</span> is ordered"#
        );
    }

    #[test]
    fn test_annotate_concepts_case_insensitive() {
        assert_eq!(
            annotate_concepts("Recursion everywhere"),
            r#"<span class="concept">Recursion</span> everywhere"#
        );
    }

    #[test]
    fn test_annotate_concepts_word_bound() {
        assert_eq!(annotate_concepts("subarrays"), "subarrays");
    }

    #[test]
    fn test_annotate_concepts_multiword_term() {
        assert_eq!(
            annotate_concepts("use a hash map here"),
            r#"use a <span class="concept">hash map</span> here"#
        );
    }

    #[test]
    fn test_annotate_concepts_skips_marked_text() {
        let marked = r#"<span class="concept">array</span> and stack"#;
        assert_eq!(annotate_concepts(marked), marked);
    }

    #[test]
    fn test_annotate_does_not_rewrite_own_markup() {
        // "class" is itself a concept term; the inserted attribute text must
        // not be matched again.
        let out = annotate_concepts("array class");
        assert_eq!(
            out,
            r#"<span class="concept">array</span> <span class="concept">class</span>"#
        );
    }

    #[test]
    fn test_highlight_key_sentence() {
        assert_eq!(
            highlight_key_sentences("Remember to practice daily. Then rest."),
            r#"<span class="highlight">Remember to practice daily.</span> Then rest."#
        );
    }

    #[test]
    fn test_highlight_matches_inside_longer_word() {
        assert_eq!(
            highlight_key_sentences("unimportant detail here."),
            r#"un<span class="highlight">important detail here.</span>"#
        );
    }

    #[test]
    fn test_highlight_skips_marked_text() {
        let marked = r#"<span class="highlight">Important stuff.</span>"#;
        assert_eq!(highlight_key_sentences(marked), marked);
    }

    #[test]
    fn test_convert_step_lists() {
        assert_eq!(
            convert_step_lists("1. Tune up\n2. Strum\n"),
            r#"<ul class="steps"><li>Tune up</li><li>Strum</li></ul>"#
        );
    }

    #[test]
    fn test_convert_step_lists_skips_marked_text() {
        let marked = r#"<ul class="steps"><li>x</li></ul>"#;
        assert_eq!(convert_step_lists(marked), marked);
    }

    #[test]
    fn test_convert_step_lists_leaves_prose() {
        assert_eq!(convert_step_lists("no steps here"), "no steps here");
    }

    #[test]
    fn test_enhance_composes() {
        let out = enhance("Remember the array. 1. Practice\n2. Review\n");
        assert!(out.contains(r#"<span class="concept">array</span>"#));
        assert!(out.contains(r#"class="highlight""#));
        assert!(out.contains(r#"<ul class="steps">"#));
    }
}
