//! Report value objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! CLI JSON output and downstream consumers. Reports are fully determined
//! by the input text and never mutated after construction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity category of a [`Suggestion`].
///
/// Presentation layers map these to icons and colors: success is
/// affirmative, warning cautionary, error blocking, tip informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// The text already meets the relevant threshold.
    Success,
    /// The text crosses a threshold worth fixing.
    Warning,
    /// The text crosses a threshold that badly hurts readability.
    Error,
    /// An optional improvement, not a defect.
    Tip,
}

/// A categorized, human-readable improvement recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Severity category.
    pub kind: SuggestionKind,
    /// Recommendation text.
    pub message: String,
}

impl Suggestion {
    pub(crate) fn new(kind: SuggestionKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

/// The full analysis report for one block of text.
///
/// An immutable value object fully derived from the input: analyzing the
/// same text twice yields identical reports. The caller owns any identity
/// (document IDs) and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Average word length, rounded to one decimal.
    pub avg_word_length: f64,
    /// Estimated reading time in minutes (at least 1 for non-empty text).
    pub reading_time_minutes: usize,
    /// Readability score in [0, 100]; higher is easier to read.
    pub readability_score: u8,
    /// Engagement score in [0, 100].
    pub engagement_score: u8,
    /// Suggestions in rule-evaluation order. Never empty: the readability
    /// tier rule always contributes exactly one entry.
    pub suggestions: Vec<Suggestion>,
}
