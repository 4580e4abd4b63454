//! Step and exercise extraction.

use std::sync::LazyLock;

use regex::Regex;

// A step marker is `step N`, `N.`/`N)`, or a bullet. The bullet branch is not
// anchored to line start; mid-line markers match too, as in the legacy
// extractor.
static STEP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:step\s*\d+[:.)]*\s*|\d+[.)]\s*|•\s*|[-*]\s*)([^\n]+)").unwrap()
});

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static EXERCISE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s+").unwrap());
static EXERCISE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\d+\.").unwrap());

/// A titled description unit extracted from numbered or bulleted text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// An interactive exercise item extracted from a numbered list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exercise {
    /// 1-based position in the source list.
    pub id: usize,
    /// Full item text, marker included.
    pub text: String,
    /// Always starts out false; the UI flips it.
    pub completed: bool,
}

/// Extract steps from response text, in source order.
///
/// Content containing a colon splits once into title and description
/// (additional colons rejoin the tail). Content without a colon gets a
/// synthesized `Step N` title from its 1-based match position.
///
/// When no markers match at all, the text is split on blank lines instead;
/// a single paragraph yields no steps.
pub fn extract_steps(text: &str) -> Vec<Step> {
    let contents: Vec<&str> = STEP_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    if !contents.is_empty() {
        return contents
            .iter()
            .enumerate()
            .map(|(index, content)| {
                let parts: Vec<&str> = content.split(':').map(str::trim).collect();
                if parts.len() > 1 {
                    Step {
                        title: parts[0].to_owned(),
                        description: parts[1..].join(": "),
                    }
                } else {
                    Step {
                        title: format!("Step {}", index + 1),
                        description: (*content).to_owned(),
                    }
                }
            })
            .collect();
    }

    let paragraphs: Vec<&str> = BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if paragraphs.len() > 1 {
        tracing::debug!(
            paragraphs = paragraphs.len(),
            "no step markers found, falling back to paragraph split"
        );
        return paragraphs
            .iter()
            .enumerate()
            .map(|(index, para)| Step {
                title: format!("Step {}", index + 1),
                description: (*para).to_owned(),
            })
            .collect();
    }

    Vec::new()
}

/// Extract numbered exercise items, each spanning lines until the next
/// `\nN.` marker or end of input. Item text keeps its marker.
pub fn extract_exercises(text: &str) -> Vec<Exercise> {
    let mut exercises = Vec::new();
    let mut pos = 0;

    while let Some(marker) = EXERCISE_START.find(&text[pos..]) {
        let item_start = pos + marker.start();
        let marker_end = pos + marker.end();
        let item_end = EXERCISE_BOUNDARY
            .find(&text[item_start..])
            .map_or(text.len(), |b| item_start + b.start());

        if marker_end >= item_end {
            // Marker with no content; keep scanning.
            pos = marker_end;
            continue;
        }

        exercises.push(Exercise {
            id: exercises.len() + 1,
            text: text[item_start..item_end].trim().to_owned(),
            completed: false,
        });
        pos = item_end;
    }

    exercises
}
