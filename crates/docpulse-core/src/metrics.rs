//! Quantitative text metrics.
//!
//! Derives counts, average word length, estimated reading time, and the
//! syllable approximation from the tokenizer's output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Assumed reading speed in words per minute.
const READING_SPEED_WPM: usize = 200;

/// Quantitative metrics derived from a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Number of sentences (terminal-punctuation splits).
    pub sentence_count: usize,
    /// Number of paragraphs (blank-line splits).
    pub paragraph_count: usize,
    /// Average word length, rounded to one decimal. 0.0 for empty text.
    pub avg_word_length: f64,
    /// Estimated reading time at 200 wpm, rounded up. 0 for empty text.
    pub reading_time_minutes: usize,
    /// Consonant-count syllable proxy (see [`syllable_approximation`]).
    pub syllable_approx: usize,
}

/// Compute metrics from text and its tokenized counts.
#[tracing::instrument(skip(text), fields(text_len = text.len(), word_count))]
pub fn compute_metrics(
    text: &str,
    word_count: usize,
    sentence_count: usize,
    paragraph_count: usize,
) -> TextMetrics {
    TextMetrics {
        word_count,
        sentence_count,
        paragraph_count,
        avg_word_length: avg_word_length(text, word_count),
        reading_time_minutes: reading_time_minutes(word_count),
        syllable_approx: syllable_approximation(text),
    }
}

/// Average word length: non-whitespace characters divided by word count.
///
/// The naive formula divides unconditionally and yields NaN on empty input;
/// zero words is special-cased to 0.0 so a non-numeric value never reaches
/// the report. The result is rounded to one decimal place.
fn avg_word_length(text: &str, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let non_ws = text.chars().filter(|c| !c.is_whitespace()).count();
    let raw = non_ws as f64 / word_count as f64;
    (raw * 10.0).round() / 10.0
}

/// Estimated reading time in whole minutes, rounded up.
///
/// The ceiling of zero is zero, so empty text needs no special case.
const fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(READING_SPEED_WPM)
}

/// Approximate syllable count: ASCII consonants remaining after lower-casing
/// and stripping everything that is not a letter, then stripping vowels.
///
/// A crude consonant-count proxy rather than real syllable counting. The
/// readability formula's coefficients were tuned against this exact
/// heuristic, so it must not be replaced with a dictionary-backed counter.
pub fn syllable_approximation(text: &str) -> usize {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_word_length_counts_non_whitespace() {
        // "The cat" -> 6 non-whitespace chars / 2 words = 3.0
        let m = compute_metrics("The cat", 2, 1, 1);
        assert!((m.avg_word_length - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn avg_word_length_rounds_to_one_decimal() {
        // "abc de" -> 5 chars / 2 words = 2.5
        let m = compute_metrics("abc de", 2, 1, 1);
        assert!((m.avg_word_length - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_words_yields_zero_average_not_nan() {
        // The naive division would produce NaN here
        let m = compute_metrics("", 0, 0, 0);
        assert_eq!(m.avg_word_length, 0.0);
        assert!(m.avg_word_length.is_finite());
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
        assert_eq!(reading_time_minutes(200), 1);
        // ceil(201 / 200) = 2
        assert_eq!(reading_time_minutes(201), 2);
        assert_eq!(reading_time_minutes(400), 2);
    }

    #[test]
    fn syllable_approx_strips_non_letters_and_vowels() {
        // "helloworld" minus vowels -> h l l w r l d
        assert_eq!(syllable_approximation("Hello, World! 123"), 7);
    }

    #[test]
    fn syllable_approx_ignores_non_ascii() {
        assert_eq!(syllable_approximation("café"), 2); // c, f
        assert_eq!(syllable_approximation("日本語"), 0);
    }

    #[test]
    fn syllable_approx_empty() {
        assert_eq!(syllable_approximation(""), 0);
        assert_eq!(syllable_approximation("aeiou AEIOU"), 0);
    }
}
