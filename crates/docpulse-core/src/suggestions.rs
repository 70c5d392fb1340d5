//! Threshold-rule suggestion engine.
//!
//! Evaluates a fixed, ordered rule table against the text and its metrics.
//! Rules are independent: there is no early exit, every applicable rule
//! fires, and output order is exactly evaluation order (not severity).

use crate::metrics::TextMetrics;
use crate::report::{Suggestion, SuggestionKind};
use crate::text;

/// Words-per-sentence ratio above which sentences count as long.
const LONG_SENTENCE_RATIO: f64 = 20.0;
/// Word count above which missing questions triggers a tip.
const QUESTION_WORD_THRESHOLD: usize = 100;
/// Word count above which missing numbers triggers a tip.
const NUMBER_WORD_THRESHOLD: usize = 200;
/// Word count above which fewer than three paragraphs triggers a warning.
const PARAGRAPH_WORD_THRESHOLD: usize = 150;
/// Word count above which missing bullet points triggers a tip.
const BULLET_WORD_THRESHOLD: usize = 300;
/// Readability below this is flagged as an error.
const READABILITY_ERROR_BELOW: u8 = 30;
/// Readability below this (but at or above the error tier) is a warning.
const READABILITY_WARN_BELOW: u8 = 60;

const MSG_LONG_SENTENCES: &str =
    "Consider breaking down long sentences for better readability.";
const MSG_ADD_QUESTIONS: &str =
    "Add questions to engage readers and encourage interaction.";
const MSG_ADD_NUMBERS: &str = "Include statistics or numbers to add credibility.";
const MSG_MORE_PARAGRAPHS: &str =
    "Break content into more paragraphs for better visual flow.";
const MSG_COMPLEXITY_HIGH: &str =
    "Text complexity is very high — simplify for wider audience reach.";
const MSG_SIMPLIFY: &str = "Consider simplifying language for broader appeal.";
const MSG_READABILITY_GOOD: &str = "Good readability score — accessible to most readers.";
const MSG_ADD_BULLETS: &str = "Use bullet points or lists to highlight key information.";

/// Evaluate the rule table and return suggestions in evaluation order.
///
/// The readability-tier rule is unconditional, so the result always has at
/// least one entry.
#[tracing::instrument(skip(text, metrics), fields(word_count = metrics.word_count))]
pub fn build_suggestions(
    text: &str,
    metrics: &TextMetrics,
    readability_score: u8,
) -> Vec<Suggestion> {
    let mut out = Vec::new();

    // Ratio uses float division: 41 words over 2 sentences is long.
    if metrics.sentence_count > 0
        && metrics.word_count as f64 / metrics.sentence_count as f64 > LONG_SENTENCE_RATIO
    {
        out.push(Suggestion::new(SuggestionKind::Warning, MSG_LONG_SENTENCES));
    }

    if !text::contains_question(text) && metrics.word_count > QUESTION_WORD_THRESHOLD {
        out.push(Suggestion::new(SuggestionKind::Tip, MSG_ADD_QUESTIONS));
    }

    if !text::contains_digit(text) && metrics.word_count > NUMBER_WORD_THRESHOLD {
        out.push(Suggestion::new(SuggestionKind::Tip, MSG_ADD_NUMBERS));
    }

    if metrics.paragraph_count < 3 && metrics.word_count > PARAGRAPH_WORD_THRESHOLD {
        out.push(Suggestion::new(SuggestionKind::Warning, MSG_MORE_PARAGRAPHS));
    }

    // Unconditional tier: exactly one of error/warning/success.
    if readability_score < READABILITY_ERROR_BELOW {
        out.push(Suggestion::new(SuggestionKind::Error, MSG_COMPLEXITY_HIGH));
    } else if readability_score < READABILITY_WARN_BELOW {
        out.push(Suggestion::new(SuggestionKind::Warning, MSG_SIMPLIFY));
    } else {
        out.push(Suggestion::new(SuggestionKind::Success, MSG_READABILITY_GOOD));
    }

    if !text::contains_bullet_marker(text) && metrics.word_count > BULLET_WORD_THRESHOLD {
        out.push(Suggestion::new(SuggestionKind::Tip, MSG_ADD_BULLETS));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(words: usize, sentences: usize, paragraphs: usize) -> TextMetrics {
        TextMetrics {
            word_count: words,
            sentence_count: sentences,
            paragraph_count: paragraphs,
            avg_word_length: 4.0,
            reading_time_minutes: words.div_ceil(200),
            syllable_approx: 0,
        }
    }

    #[test]
    fn readability_tier_is_always_present() {
        let s = build_suggestions("", &metrics(0, 0, 0), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].kind, SuggestionKind::Error);
    }

    #[test]
    fn tier_boundaries() {
        let m = metrics(10, 2, 1);
        let kind_at = |score| build_suggestions("short text", &m, score)[0].kind;
        assert_eq!(kind_at(29), SuggestionKind::Error);
        assert_eq!(kind_at(30), SuggestionKind::Warning);
        assert_eq!(kind_at(59), SuggestionKind::Warning);
        assert_eq!(kind_at(60), SuggestionKind::Success);
    }

    #[test]
    fn long_sentence_rule_fires_first() {
        // 25 words in one sentence: 25/1 > 20
        let s = build_suggestions("irrelevant", &metrics(25, 1, 1), 80);
        assert_eq!(s[0].kind, SuggestionKind::Warning);
        assert_eq!(s[0].message, MSG_LONG_SENTENCES);
    }

    #[test]
    fn long_sentence_ratio_uses_float_division() {
        // 41/2 = 20.5 > 20 fires; integer division would say 20 and miss it
        let s = build_suggestions("x", &metrics(41, 2, 3), 80);
        assert_eq!(s[0].message, MSG_LONG_SENTENCES);
        // Exactly 20 does not fire
        let s = build_suggestions("x", &metrics(40, 2, 3), 80);
        assert_ne!(s[0].message, MSG_LONG_SENTENCES);
    }

    #[test]
    fn thresholds_unmet_leave_only_the_tier() {
        // 6 words, no questions/digits/bullets: every count rule is below
        // its threshold, so only the tier entry remains
        let s = build_suggestions("Buy milk Buy eggs Buy bread", &metrics(6, 3, 1), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].message, MSG_COMPLEXITY_HIGH);
    }

    #[test]
    fn question_rule_needs_both_absence_and_length() {
        let m = metrics(101, 10, 3);
        let s = build_suggestions("plain prose", &m, 80);
        assert!(s.iter().any(|x| x.message == MSG_ADD_QUESTIONS));
        let s = build_suggestions("has one? yes", &m, 80);
        assert!(!s.iter().any(|x| x.message == MSG_ADD_QUESTIONS));
    }

    #[test]
    fn number_and_bullet_rules_respect_thresholds() {
        let s = build_suggestions("plain prose", &metrics(301, 20, 5), 80);
        assert!(s.iter().any(|x| x.message == MSG_ADD_NUMBERS));
        assert!(s.iter().any(|x| x.message == MSG_ADD_BULLETS));

        let s = build_suggestions("- bullet 5", &metrics(301, 20, 5), 80);
        assert!(!s.iter().any(|x| x.message == MSG_ADD_NUMBERS));
        assert!(!s.iter().any(|x| x.message == MSG_ADD_BULLETS));
    }

    #[test]
    fn paragraph_rule() {
        let s = build_suggestions("text? 1", &metrics(151, 10, 2), 80);
        assert!(s.iter().any(|x| x.message == MSG_MORE_PARAGRAPHS));
        let s = build_suggestions("text? 1", &metrics(151, 10, 3), 80);
        assert!(!s.iter().any(|x| x.message == MSG_MORE_PARAGRAPHS));
    }

    #[test]
    fn rules_are_independent_and_ordered() {
        // Long single-sentence wall of text with nothing going for it:
        // rules 1-4 fire, the tier errors, and the bullet tip lands last
        let s = build_suggestions("dense prose", &metrics(400, 1, 1), 10);
        let messages: Vec<&str> = s.iter().map(|x| x.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                MSG_LONG_SENTENCES,
                MSG_ADD_QUESTIONS,
                MSG_ADD_NUMBERS,
                MSG_MORE_PARAGRAPHS,
                MSG_COMPLEXITY_HIGH,
                MSG_ADD_BULLETS,
            ]
        );
    }
}
