//! Renders the constrained markdown dialect used by tutor responses into
//! HTML fragments.
//!
//! Language-model output arrives as free-form text containing a small markdown
//! subset: `#` headings, `**bold**`/`*italic*` emphasis, fenced and inline
//! code, `-`/`*`/`1.` lists, `>` blockquotes, and `|`-delimited tables. The
//! [`Renderer`] classifies each line into a block token and emits an HTML
//! fragment in a single pass.
//!
//! The dialect intentionally mirrors the quirks of the legacy formatter this
//! crate replaces:
//! - numbered lists render as `<ul>`, never `<ol>`
//! - table separator rows (`|---|---|`) render as ordinary rows of dash cells
//! - `#` markers away from line start are stripped rather than promoted
//! - fenced code bodies are still subject to `<br>`/paragraph rewriting
//!
//! # Escaping
//!
//! By default every plain-text span is HTML-escaped before markup generation
//! ([`EscapeMode::Escape`]). [`EscapeMode::Legacy`] reproduces the legacy
//! unescaped output for callers that depend on it.
//!
//! # Example
//!
//! ```
//! use tutortext_renderer::render;
//!
//! assert_eq!(render("# Lesson 1"), "<h2>Lesson 1</h2>");
//! assert_eq!(render("**ready?**"), "<p><strong>ready?</strong></p>");
//! ```

mod classify;
mod enhance;
mod escape;
mod inline;
mod renderer;

pub use enhance::{annotate_concepts, convert_step_lists, enhance, highlight_key_sentences};
pub use escape::escape_html;
pub use renderer::{EscapeMode, ParseEscapeModeError, Renderer, render};
