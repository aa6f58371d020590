//! Length scorer, an ordinary signal in the default setup.

use super::Scorer;

/// Scores text by character length.
///
/// Length is counted in Unicode code points, not bytes, so multi-byte
/// text is measured the same as ASCII. A length of at most 1 scores 0,
/// up to 100 scores 1, and anything longer scores 2.
pub struct LengthScorer;

impl LengthScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LengthScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for LengthScorer {
    fn name(&self) -> &'static str {
        "length"
    }

    fn score(&self, text: &str) -> u32 {
        let length = text.chars().count();

        if length > 100 {
            return 2;
        }

        if length > 1 {
            return 1;
        }

        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_scores_zero() {
        let scorer = LengthScorer::new();

        assert_eq!(scorer.score(""), 0);
    }

    #[test]
    fn single_character_scores_zero() {
        let scorer = LengthScorer::new();

        assert_eq!(scorer.score("t"), 0);
    }

    #[test]
    fn up_to_one_hundred_characters_scores_one() {
        let scorer = LengthScorer::new();

        assert_eq!(scorer.score("tt"), 1);
        assert_eq!(scorer.score(&"t".repeat(100)), 1);
    }

    #[test]
    fn more_than_one_hundred_characters_scores_two() {
        let scorer = LengthScorer::new();

        assert_eq!(scorer.score(&"t".repeat(101)), 2);
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        // 100 two-byte characters: 200 bytes, but still length 100.
        let scorer = LengthScorer::new();

        assert_eq!(scorer.score(&"é".repeat(100)), 1);
        assert_eq!(scorer.score(&"é".repeat(101)), 2);
    }
}
