//! Line/block classification.
//!
//! Splits raw text into an ephemeral stream of [`Block`] tokens which the
//! emitter consumes in a single pass. Tokens carry raw (untransformed) text;
//! escaping and inline rewriting happen at emission time.

/// One classified block-level span of the input.
///
/// The stream lives only for the duration of a single render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Heading line. `level` is the output tag level (2, 3 or 4).
    Heading { level: u8, text: String },
    /// Bulleted or numbered list item.
    ListItem(String),
    /// Single `>`-prefixed line.
    QuoteLine(String),
    /// `|`-delimited row, split into trimmed cells.
    TableRow(Vec<String>),
    /// Fenced code block with optional language tag.
    Code { lang: Option<String>, body: String },
    /// Blank (whitespace-only) line; separates paragraphs.
    Blank,
    /// Anything else.
    Plain(String),
}

/// Classify raw text into a block token stream.
pub fn classify(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(lang) = fence_open(line) {
            // A fence needs at least one body line; "```" directly followed
            // by "```" stays literal, matching the legacy formatter.
            if let Some(close) = find_fence_close(&lines, i + 2) {
                let body = lines[i + 1..close].join("\n");
                blocks.push(Block::Code {
                    lang: lang.map(str::to_owned),
                    body,
                });
                // Text trailing the closing backticks continues as a normal line.
                let rest = &lines[close][3..];
                if !rest.is_empty() {
                    blocks.push(classify_line(rest));
                }
                i = close + 1;
                continue;
            }
        }

        blocks.push(classify_line(line));
        i += 1;
    }

    blocks
}

/// Classify a single non-fence line.
fn classify_line(line: &str) -> Block {
    if line.trim().is_empty() {
        return Block::Blank;
    }

    // Headings are anchored to line start: no leading whitespace allowed.
    if let Some(block) = heading(line) {
        return block;
    }

    let stripped = line.trim_start();

    if let Some(rest) = list_item(stripped) {
        return Block::ListItem(rest.to_owned());
    }

    if let Some(rest) = stripped.strip_prefix('>') {
        if rest.starts_with(char::is_whitespace) {
            return Block::QuoteLine(rest.trim_start().to_owned());
        }
    }

    let trimmed = line.trim();
    if trimmed.len() > 2 && trimmed.starts_with('|') && trimmed.ends_with('|') {
        let inner = &trimmed[1..trimmed.len() - 1];
        let cells = inner.split('|').map(|c| c.trim().to_owned()).collect();
        return Block::TableRow(cells);
    }

    Block::Plain(line.to_owned())
}

/// Parse a heading line: 1 `#` renders as `<h2>`, 2 as `<h3>`, 3-6 as `<h4>`.
fn heading(line: &str) -> Option<Block> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let level = match hashes {
        1 => 2,
        2 => 3,
        _ => 4,
    };
    Some(Block::Heading {
        level,
        text: rest.trim_start().to_owned(),
    })
}

/// Match `- `, `* `, or `N. ` list markers and return the item text.
fn list_item(stripped: &str) -> Option<&str> {
    if let Some(rest) = stripped.strip_prefix('-').or_else(|| stripped.strip_prefix('*')) {
        if rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
    }

    let digits = stripped.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = stripped[digits..].strip_prefix('.') {
            if rest.starts_with(char::is_whitespace) {
                return Some(rest.trim_start());
            }
        }
    }

    None
}

/// Recognize an opening fence: three backticks plus an optional lowercase
/// language tag filling the rest of the line.
fn fence_open(line: &str) -> Option<Option<&str>> {
    let rest = line.strip_prefix("```")?;
    if !rest.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(if rest.is_empty() { None } else { Some(rest) })
}

/// Find the next line starting with three backticks, from `from` onwards.
fn find_fence_close(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&j| lines[j].starts_with("```"))
}
