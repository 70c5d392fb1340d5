//! Text splitting and feature detection.
//!
//! Provides word, sentence, and paragraph splitting for the analysis
//! pipeline, plus presence checks for questions, digits, and bullet markers.
//!
//! Splitting is deliberately coarse: sentences break on any run of `.`, `!`,
//! or `?` with no abbreviation, decimal, or ellipsis awareness. The
//! readability tier thresholds were tuned against exactly this behavior, so
//! a smarter splitter would shift scores. Do not "fix" it.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for sentence boundaries: one or more terminal punctuation marks.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Regex for paragraph breaks: two or more consecutive newlines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Regex for a bullet marker: `-` or `*` followed by whitespace.
///
/// The source material also used a non-ASCII bullet glyph here, but its
/// byte sequence was corrupted; only the ASCII markers are recognized.
static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-*]\s").expect("valid regex"));

/// Split text into words on runs of whitespace, dropping empty results.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, or `?`.
///
/// Pieces that are empty after trimming are dropped, so trailing
/// punctuation does not produce a phantom sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs on blank lines (two or more newlines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Returns `true` if the text contains a question mark.
pub fn contains_question(text: &str) -> bool {
    text.contains('?')
}

/// Returns `true` if the text contains an ASCII digit.
pub fn contains_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// Returns `true` if the text contains a bullet marker.
pub fn contains_bullet_marker(text: &str) -> bool {
    BULLET_MARKER.is_match(text)
}
