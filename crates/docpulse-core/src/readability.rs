//! Readability scoring on a 0–100 scale (higher is easier).
//!
//! Flesch-Reading-Ease-style formula:
//! `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! The syllable input is the consonant-count proxy from
//! [`crate::metrics::syllable_approximation`], not a true syllable count;
//! the coefficients and the downstream suggestion tiers are calibrated
//! against that proxy.

const FLESCH_BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_DENSITY_WEIGHT: f64 = 84.6;

/// Score readability from word, sentence, and approximate syllable counts.
///
/// Both ratio terms are undefined when `word_count` or `sentence_count` is
/// zero; those inputs score 0 (the clamped floor) rather than propagating a
/// non-numeric value. Otherwise the raw score is clamped to [0, 100] and
/// rounded to the nearest integer.
pub fn readability_score(word_count: usize, sentence_count: usize, syllable_approx: usize) -> u8 {
    if word_count == 0 || sentence_count == 0 {
        return 0;
    }

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllable_approx as f64 / word_count as f64;
    let raw = FLESCH_BASE
        - SENTENCE_LENGTH_WEIGHT * words_per_sentence
        - SYLLABLE_DENSITY_WEIGHT * syllables_per_word;

    raw.clamp(0.0, 100.0).round() as u8
}
