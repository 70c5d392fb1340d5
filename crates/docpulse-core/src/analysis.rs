//! The analysis pipeline.
//!
//! Composes the fixed pipeline: tokenize, derive metrics, score
//! readability, then build suggestions and score engagement. A single pass
//! over request-scoped values with no shared state, so calls are safe to
//! run concurrently and the result is a pure function of the input.

use crate::engagement::engagement_score;
use crate::error::AnalysisResult;
use crate::metrics::compute_metrics;
use crate::readability::readability_score;
use crate::report::AnalysisReport;
use crate::suggestions::build_suggestions;
use crate::text;

/// Analyze a block of text and produce the full report.
///
/// Deterministic and infallible: degenerate inputs (empty text, no
/// sentences) are normal and yield a well-formed all-zero report rather
/// than an error.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn analyze(input: &str) -> AnalysisReport {
    let words = text::split_words(input);
    let sentences = text::split_sentences(input);
    let paragraphs = text::split_paragraphs(input);

    let metrics = compute_metrics(input, words.len(), sentences.len(), paragraphs.len());
    let readability = readability_score(
        metrics.word_count,
        metrics.sentence_count,
        metrics.syllable_approx,
    );
    let suggestions = build_suggestions(input, &metrics, readability);
    let engagement = engagement_score(input, readability, metrics.paragraph_count);

    tracing::debug!(
        word_count = metrics.word_count,
        readability,
        engagement,
        suggestion_count = suggestions.len(),
        "analysis complete"
    );

    AnalysisReport {
        word_count: metrics.word_count,
        sentence_count: metrics.sentence_count,
        paragraph_count: metrics.paragraph_count,
        avg_word_length: metrics.avg_word_length,
        reading_time_minutes: metrics.reading_time_minutes,
        readability_score: readability,
        engagement_score: engagement,
        suggestions,
    }
}

/// Analyze raw bytes, validating UTF-8 at the boundary.
///
/// Returns [`crate::AnalysisError::InvalidInput`] when the bytes are not
/// valid UTF-8. This is the only failure mode the engine has.
pub fn analyze_bytes(bytes: &[u8]) -> AnalysisResult<AnalysisReport> {
    let input = std::str::from_utf8(bytes)?;
    Ok(analyze(input))
}
