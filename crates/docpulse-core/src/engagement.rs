//! Engagement scoring.
//!
//! A weighted additive heuristic for how likely a reader is to engage with
//! the text: presence of questions, numbers, and bullets, paragraph count,
//! and the readability score each contribute a fixed bonus on top of a base
//! of 50, capped at 100.

use crate::text;

/// Additive base; the minimum attainable score.
const BASE_SCORE: u8 = 50;
const QUESTION_BONUS: u8 = 10;
const NUMBER_BONUS: u8 = 10;
const BULLET_BONUS: u8 = 5;
const READABILITY_BONUS: u8 = 15;
const PARAGRAPH_BONUS: u8 = 10;

/// Readability must exceed this to earn its bonus.
const READABILITY_BONUS_ABOVE: u8 = 60;
/// Paragraph count must reach this to earn its bonus.
const PARAGRAPH_BONUS_AT: usize = 3;

/// Score engagement from text features, readability, and paragraph count.
///
/// Feature-presence checks are independent of word count, so even empty
/// text scores the base 50. The cap applies only at the top: the maximum
/// raw total is exactly 100, but the clamp stays as a guard against future
/// bonus changes.
pub fn engagement_score(text: &str, readability_score: u8, paragraph_count: usize) -> u8 {
    let mut score = BASE_SCORE;

    if text::contains_question(text) {
        score += QUESTION_BONUS;
    }
    if text::contains_digit(text) {
        score += NUMBER_BONUS;
    }
    if text::contains_bullet_marker(text) {
        score += BULLET_BONUS;
    }
    if readability_score > READABILITY_BONUS_ABOVE {
        score += READABILITY_BONUS;
    }
    if paragraph_count >= PARAGRAPH_BONUS_AT {
        score += PARAGRAPH_BONUS;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_the_base() {
        assert_eq!(engagement_score("", 0, 0), 50);
    }

    #[test]
    fn each_bonus_is_additive() {
        assert_eq!(engagement_score("why?", 0, 0), 60);
        assert_eq!(engagement_score("42", 0, 0), 60);
        assert_eq!(engagement_score("- item", 0, 0), 55);
        assert_eq!(engagement_score("plain", 61, 0), 65);
        assert_eq!(engagement_score("plain", 0, 3), 60);
    }

    #[test]
    fn readability_bonus_is_strictly_above_sixty() {
        assert_eq!(engagement_score("plain", 60, 0), 50);
        assert_eq!(engagement_score("plain", 61, 0), 65);
    }

    #[test]
    fn all_bonuses_cap_at_one_hundred() {
        assert_eq!(engagement_score("why? - 42", 100, 3), 100);
    }

    #[test]
    fn question_digit_paragraphs_readable_no_bullet() {
        // 50 + 10 + 10 + 15 + 10 = 95; no bullet bonus
        assert_eq!(engagement_score("Is it 5?", 80, 3), 95);
    }
}
