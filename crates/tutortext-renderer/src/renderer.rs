//! Single-pass emitter over the classified block stream.

use std::fmt::Write;
use std::str::FromStr;

use thiserror::Error;

use crate::classify::{Block, classify};
use crate::escape::escape_html;
use crate::inline;

/// Escaping policy for plain-text spans.
///
/// The legacy formatter interpolated model output into HTML unescaped.
/// [`EscapeMode::Escape`] is the default; [`EscapeMode::Legacy`] reproduces
/// the old behavior for callers that still depend on raw passthrough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Escape `&`, `<`, `>`, `"`, `'` in every text span before markup
    /// generation.
    #[default]
    Escape,
    /// No escaping; text spans pass through byte-for-byte.
    Legacy,
}

/// Error returned when parsing an [`EscapeMode`] from configuration text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown escape mode `{0}`, expected `escape` or `legacy`")]
pub struct ParseEscapeModeError(String);

impl FromStr for EscapeMode {
    type Err = ParseEscapeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "escape" => Ok(Self::Escape),
            "legacy" => Ok(Self::Legacy),
            other => Err(ParseEscapeModeError(other.to_owned())),
        }
    }
}

/// Renders the constrained markdown dialect into an HTML fragment.
///
/// Total over any input string: malformed or partial markup degrades to
/// literal text, and empty input yields an empty fragment. Rendering is
/// deterministic and holds no state between calls.
///
/// # Example
///
/// ```
/// use tutortext_renderer::{EscapeMode, Renderer};
///
/// let renderer = Renderer::new().with_escape_mode(EscapeMode::Legacy);
/// assert_eq!(renderer.render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    escape: EscapeMode,
}

/// Render with the default configuration (escaping enabled).
#[must_use]
pub fn render(text: &str) -> String {
    Renderer::new().render(text)
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escaping policy for text spans.
    #[must_use]
    pub fn with_escape_mode(mut self, mode: EscapeMode) -> Self {
        self.escape = mode;
        self
    }

    /// Render raw text into an HTML fragment.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let blocks = classify(text);
        tracing::debug!(blocks = blocks.len(), "classified input");

        let mut out = String::with_capacity(text.len() + text.len() / 2);
        let mut i = 0;
        while i < blocks.len() {
            match &blocks[i] {
                Block::Blank => i += 1,
                Block::Heading { level, text } => {
                    write!(out, "<h{level}>{}</h{level}>", self.span(text)).unwrap();
                    i += 1;
                }
                Block::Code { lang, body } => {
                    self.emit_code(lang.as_deref(), body, &mut out);
                    i += 1;
                }
                Block::ListItem(_) => {
                    let (items, next) = run(&blocks, i, |b| match b {
                        Block::ListItem(text) => Some(text),
                        _ => None,
                    });
                    out.push_str("<ul>");
                    for item in items {
                        write!(out, "<li>{}</li>", self.span(item)).unwrap();
                    }
                    out.push_str("</ul>");
                    i = next;
                }
                Block::QuoteLine(_) => {
                    let (lines, next) = run(&blocks, i, |b| match b {
                        Block::QuoteLine(text) => Some(text),
                        _ => None,
                    });
                    for line in lines {
                        write!(out, "<blockquote>{}</blockquote>", self.span(line)).unwrap();
                    }
                    i = next;
                }
                Block::TableRow(_) => {
                    let (rows, next) = run(&blocks, i, |b| match b {
                        Block::TableRow(cells) => Some(cells),
                        _ => None,
                    });
                    out.push_str("<table>");
                    for cells in rows {
                        out.push_str("<tr>");
                        for cell in cells {
                            write!(out, "<td>{}</td>", self.span(cell)).unwrap();
                        }
                        out.push_str("</tr>");
                    }
                    out.push_str("</table>");
                    i = next;
                }
                Block::Plain(_) => {
                    out.push_str("<p>");
                    let mut first = true;
                    while let Some(Block::Plain(line)) = blocks.get(i) {
                        if !first {
                            out.push_str("<br>");
                        }
                        out.push_str(&self.span(line));
                        first = false;
                        i += 1;
                    }
                    out.push_str("</p>");
                }
            }
        }

        wrap_fragment(out)
    }

    /// Escape (per policy) and rewrite inline markup for one text span.
    fn span(&self, text: &str) -> String {
        match self.escape {
            EscapeMode::Escape => inline::rewrite(&escape_html(text)),
            EscapeMode::Legacy => inline::rewrite(text),
        }
    }

    /// Emit a fenced code block.
    ///
    /// The body is trimmed but deliberately not protected from the passes the
    /// legacy formatter ran around fence extraction: each line goes through
    /// the same escape-and-inline rewriting as any other span (emphasis
    /// markers convert, stray `#` markers strip), blank lines become
    /// `</p><p>` and remaining newlines `<br>`. Only list/blockquote/table
    /// classification is kept out of fence bodies.
    fn emit_code(&self, lang: Option<&str>, body: &str, out: &mut String) {
        let lang = lang.unwrap_or("plaintext");
        let body = body
            .trim()
            .split('\n')
            .map(|line| self.span(line))
            .collect::<Vec<_>>()
            .join("\n");
        let body = body.replace("\n\n", "</p><p>").replace('\n', "<br>");
        write!(out, r#"<pre><code class="language-{lang}">{body}</code></pre>"#).unwrap();
    }
}

/// Collect a run of same-kind blocks starting at `start`.
///
/// Blank lines inside a run are swallowed when the run resumes afterwards,
/// so `- a\n\n- b` still coalesces into one list. Returns the extracted
/// payloads and the index of the first block past the run.
fn run<'a, T: ?Sized>(
    blocks: &'a [Block],
    start: usize,
    extract: impl Fn(&'a Block) -> Option<&'a T>,
) -> (Vec<&'a T>, usize) {
    let mut items = Vec::new();
    let mut i = start;
    while i < blocks.len() {
        if let Some(payload) = extract(&blocks[i]) {
            items.push(payload);
            i += 1;
        } else if matches!(blocks[i], Block::Blank) {
            let mut j = i;
            while matches!(blocks.get(j), Some(Block::Blank)) {
                j += 1;
            }
            match blocks.get(j).and_then(&extract) {
                Some(payload) => {
                    items.push(payload);
                    i = j + 1;
                }
                None => break,
            }
        } else {
            break;
        }
    }
    (items, i)
}

/// Wrap the fragment in a single `<p>` unless it already starts with a block
/// element.
fn wrap_fragment(out: String) -> String {
    const BLOCK_STARTS: [&str; 6] = ["<p>", "<h", "<ul>", "<pre>", "<table>", "<blockquote>"];
    if out.is_empty() || BLOCK_STARTS.iter().any(|tag| out.starts_with(tag)) {
        out
    } else {
        format!("<p>{out}</p>")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn legacy(text: &str) -> String {
        Renderer::new()
            .with_escape_mode(EscapeMode::Legacy)
            .render(text)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
        assert_eq!(render("   \n  "), "");
    }

    #[test]
    fn test_deterministic() {
        let input = "# T\n\n**b** and *i*\n\n- a\n- b";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn test_bold_paragraph() {
        assert_eq!(render("**bold**"), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn test_heading_not_paragraph_wrapped() {
        assert_eq!(render("# Title"), "<h2>Title</h2>");
        assert_eq!(render("## Sub"), "<h3>Sub</h3>");
        assert_eq!(render("### Deep"), "<h4>Deep</h4>");
    }

    #[test]
    fn test_heading_text_gets_inline_markup() {
        assert_eq!(render("# **Big** news"), "<h2><strong>Big</strong> news</h2>");
    }

    #[test]
    fn test_bulleted_list() {
        assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_numbered_list_renders_as_ul() {
        // Numbered input never produces <ol>; regression guard for the
        // inherited quirk.
        let html = render("1. first\n2. second");
        assert_eq!(html, "<ul><li>first</li><li>second</li></ul>");
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn test_list_coalesces_across_blank_line() {
        assert_eq!(render("- a\n\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_list_item_inline_markup() {
        assert_eq!(
            render("- **x** then `y`"),
            "<ul><li><strong>x</strong> then <code>y</code></li></ul>"
        );
    }

    #[test]
    fn test_blockquote_run_concatenated() {
        assert_eq!(
            render("> a\n> b"),
            "<blockquote>a</blockquote><blockquote>b</blockquote>"
        );
    }

    #[test]
    fn test_table_two_rows() {
        assert_eq!(
            render("|a|b|\n|c|d|"),
            "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>"
        );
    }

    #[test]
    fn test_table_cells_trimmed() {
        assert_eq!(
            render("| a | b |"),
            "<table><tr><td>a</td><td>b</td></tr></table>"
        );
    }

    #[test]
    fn test_table_separator_row_not_detected() {
        // No header-row handling: the separator renders as dash cells.
        let html = render("|a|b|\n|---|---|\n|1|2|");
        assert!(html.contains("<td>---</td>"));
        assert!(!html.contains("<th>"));
    }

    #[test]
    fn test_code_fence_with_language() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_code_fence_defaults_to_plaintext() {
        assert_eq!(
            render("```\nhello\n```"),
            r#"<pre><code class="language-plaintext">hello</code></pre>"#
        );
    }

    #[test]
    fn test_code_body_newlines_rewritten() {
        // Documented limitation: fence bodies are not protected from
        // line-break rewriting.
        assert_eq!(
            render("```\na\nb\n\nc\n```"),
            r#"<pre><code class="language-plaintext">a<br>b</p><p>c</code></pre>"#
        );
    }

    #[test]
    fn test_code_body_emphasis_rewritten() {
        // The emphasis pass predates fence extraction in the legacy
        // formatter, so markers inside fence bodies still convert.
        assert_eq!(
            render("```\n**bold**\n```"),
            r#"<pre><code class="language-plaintext"><strong>bold</strong></code></pre>"#
        );
        assert_eq!(
            legacy("```\n**bold**\n```"),
            r#"<pre><code class="language-plaintext"><strong>bold</strong></code></pre>"#
        );
    }

    #[test]
    fn test_code_body_heading_markers_stripped() {
        assert_eq!(
            render("```\n# note\n```"),
            r#"<pre><code class="language-plaintext">note</code></pre>"#
        );
    }

    #[test]
    fn test_code_body_not_treated_as_list() {
        let html = render("```\n- item\n```");
        assert_eq!(html, r#"<pre><code class="language-plaintext">- item</code></pre>"#);
    }

    #[test]
    fn test_unclosed_fence_is_literal_text() {
        assert_eq!(render("```rust\nlet x = 1;"), "<p>```rust<br>let x = 1;</p>");
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(render("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_single_newline_is_br() {
        assert_eq!(render("a\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn test_stray_heading_marker_stripped_in_paragraph() {
        assert_eq!(render("see # note"), "<p>see note</p>");
    }

    #[test]
    fn test_mixed_document() {
        let html = render("# Guide\n\nIntro text.\n\n- one\n- two\n\n> tip");
        assert_eq!(
            html,
            "<h2>Guide</h2><p>Intro text.</p><ul><li>one</li><li>two</li></ul>\
             <blockquote>tip</blockquote>"
        );
    }

    #[test]
    fn test_escapes_by_default() {
        assert_eq!(
            render("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_escape_inside_inline_code() {
        assert_eq!(render("`a<b`"), "<p><code>a&lt;b</code></p>");
    }

    #[test]
    fn test_escape_inside_code_body() {
        assert_eq!(
            render("```\nif a < b {}\n```"),
            r#"<pre><code class="language-plaintext">if a &lt; b {}</code></pre>"#
        );
    }

    #[test]
    fn test_legacy_mode_passes_raw_text() {
        assert_eq!(legacy("<b>raw</b>"), "<p><b>raw</b></p>");
        assert_eq!(
            legacy("```\nif a < b {}\n```"),
            r#"<pre><code class="language-plaintext">if a < b {}</code></pre>"#
        );
    }

    #[test]
    fn test_escape_mode_from_str() {
        assert_eq!("escape".parse::<EscapeMode>().unwrap(), EscapeMode::Escape);
        assert_eq!("legacy".parse::<EscapeMode>().unwrap(), EscapeMode::Legacy);
        assert!("html".parse::<EscapeMode>().is_err());
    }

    #[test]
    fn test_unmatched_markers_pass_through() {
        assert_eq!(render("*open and `half"), "<p>*open and `half</p>");
    }
}
