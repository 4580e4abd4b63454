//! Structured extraction from tutor response text.
//!
//! Language-model responses carry loosely formatted structure: numbered or
//! bulleted steps, a strengths section, recommendation lists. The functions
//! here pull that structure out as plain data for the UI layer to render,
//! independently of HTML rendering.
//!
//! All functions are total over any input string; empty or structureless
//! input yields empty output, never an error. Extraction order always
//! follows source order.
//!
//! # Example
//!
//! ```
//! use tutortext_extract::extract_steps;
//!
//! let steps = extract_steps("1. Tune the guitar\n2. Practice chords");
//! assert_eq!(steps[0].title, "Step 1");
//! assert_eq!(steps[0].description, "Tune the guitar");
//! ```

mod assessment;
mod steps;

pub use assessment::{extract_description, extract_recommendations, extract_strengths};
pub use steps::{Exercise, Step, extract_exercises, extract_steps};
