//! Word-occurrence scorer, the decisive signal in the default setup.

use lazy_static::lazy_static;
use regex::Regex;

use super::Scorer;

lazy_static! {
    // Whole-word matches only: "category" must not count.
    static ref TARGET_WORD: Regex = Regex::new(r"(?i)\bcats?\b").unwrap();
}

/// Scores case-insensitive whole-word occurrences of "cat"/"cats".
///
/// No occurrence scores 0; otherwise the score is the occurrence count
/// plus one, capped at [`WordScorer::MAX_SCORE`].
pub struct WordScorer;

impl WordScorer {
    /// Local cap for this scorer.
    pub const MAX_SCORE: u32 = 4;

    pub fn new() -> Self {
        Self
    }
}

impl Default for WordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for WordScorer {
    fn name(&self) -> &'static str {
        "word"
    }

    fn score(&self, text: &str) -> u32 {
        let count = TARGET_WORD.find_iter(text).count() as u32;

        if count == 0 {
            return 0;
        }

        (count + 1).min(Self::MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_occurrence_scores_zero() {
        let scorer = WordScorer::new();

        assert_eq!(scorer.score(""), 0);
        assert_eq!(scorer.score("this is a test sentence without target"), 0);
    }

    #[test]
    fn one_occurrence_scores_two() {
        let scorer = WordScorer::new();

        assert_eq!(scorer.score("this is a test sentence with one cat"), 2);
    }

    #[test]
    fn two_occurrences_score_three() {
        let scorer = WordScorer::new();

        assert_eq!(scorer.score("this is a test sentence with cat and cat"), 3);
    }

    #[test]
    fn three_occurrences_score_four() {
        let scorer = WordScorer::new();

        assert_eq!(
            scorer.score("this is a test sentence with cats, cats, and cats"),
            4
        );
    }

    #[test]
    fn four_or_more_occurrences_stay_capped_at_four() {
        let scorer = WordScorer::new();

        assert_eq!(
            scorer.score("this is a test sentence with cats, cats, cats, and cats"),
            4
        );
        assert_eq!(scorer.score(&"cat ".repeat(50)), 4);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let scorer = WordScorer::new();

        assert_eq!(scorer.score("Cat facts about CATS"), 3);
    }

    #[test]
    fn substrings_of_longer_words_do_not_match() {
        let scorer = WordScorer::new();

        assert_eq!(scorer.score("a category of cattle concatenation"), 0);
    }

    #[test]
    fn punctuation_still_delimits_words() {
        let scorer = WordScorer::new();

        assert_eq!(scorer.score("cat, cat. (cat)"), 4);
    }
}
