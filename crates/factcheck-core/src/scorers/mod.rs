//! Scoring capability and the scorer registry.
//!
//! A scorer is a pure, deterministic mapping from text to a small
//! non-negative contribution. Scorers register with a [`ScorerSet`] in
//! one of two roles: a single decisive slot whose signal can determine
//! the opinion on its own, and an ordered list of ordinary scorers
//! that only matter when the decisive signal is weak.

use tracing::trace;

mod length;
mod word;

pub use length::LengthScorer;
pub use word::WordScorer;

/// A pure text-scoring capability.
///
/// `score` must be deterministic for a fixed input and free of side
/// effects; the engine relies on this to evaluate the same text from
/// several summation scopes without divergence.
pub trait Scorer: Send + Sync {
    /// Name used in trace events.
    fn name(&self) -> &'static str;

    /// Score a piece of text.
    fn score(&self, text: &str) -> u32;
}

/// Registered scorers, split by role.
///
/// The decisive slot holds at most one scorer; registering another
/// replaces it. Ordinary scorers append in registration order and
/// duplicates are allowed. The set is read-only once handed to an
/// assessor, so it is safe to share across concurrent callers.
#[derive(Default)]
pub struct ScorerSet {
    decisive: Option<Box<dyn Scorer>>,
    ordinary: Vec<Box<dyn Scorer>>,
}

impl ScorerSet {
    /// Upper bound on the aggregate score.
    pub const MAX_SCORE: u32 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register the decisive scorer, replacing any previous one.
    pub fn set_decisive(&mut self, scorer: impl Scorer + 'static) {
        self.decisive = Some(Box::new(scorer));
    }

    /// Append an ordinary scorer.
    pub fn push_ordinary(&mut self, scorer: impl Scorer + 'static) {
        self.ordinary.push(Box::new(scorer));
    }

    /// Score from the decisive scorer alone, 0 if none is registered.
    pub fn decisive_score(&self, text: &str) -> u32 {
        let score = self
            .decisive
            .as_ref()
            .map(|scorer| Self::evaluate(scorer.as_ref(), text))
            .unwrap_or(0);

        trace!(score, "decisive score");
        score
    }

    /// Sum of every ordinary scorer's score.
    ///
    /// Addition is commutative, so registration order cannot change
    /// this value.
    pub fn ordinary_score(&self, text: &str) -> u32 {
        let score = self
            .ordinary
            .iter()
            .map(|scorer| Self::evaluate(scorer.as_ref(), text))
            .sum();

        trace!(score, "ordinary score");
        score
    }

    fn evaluate(scorer: &dyn Scorer, text: &str) -> u32 {
        let score = scorer.score(text);

        trace!(scorer = scorer.name(), score, "scorer evaluated");
        score
    }

    /// Sum of all registered scorers, clamped to [0, `MAX_SCORE`].
    pub fn total_score(&self, text: &str) -> u32 {
        let total = self.decisive_score(text) + self.ordinary_score(text);

        total.min(Self::MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(u32);

    impl Scorer for FixedScorer {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn score(&self, _text: &str) -> u32 {
            self.0
        }
    }

    #[test]
    fn empty_set_scores_zero() {
        let set = ScorerSet::new();

        assert_eq!(set.decisive_score("anything"), 0);
        assert_eq!(set.ordinary_score("anything"), 0);
        assert_eq!(set.total_score("anything"), 0);
    }

    #[test]
    fn total_is_the_sum_of_both_roles() {
        let mut set = ScorerSet::new();
        set.set_decisive(FixedScorer(2));
        set.push_ordinary(FixedScorer(1));
        set.push_ordinary(FixedScorer(1));

        assert_eq!(set.decisive_score(""), 2);
        assert_eq!(set.ordinary_score(""), 2);
        assert_eq!(set.total_score(""), 4);
    }

    #[test]
    fn total_clamps_at_max_score() {
        let mut set = ScorerSet::new();
        set.set_decisive(FixedScorer(4));
        set.push_ordinary(FixedScorer(4));

        assert_eq!(set.total_score(""), ScorerSet::MAX_SCORE);
    }

    #[test]
    fn registering_a_second_decisive_scorer_replaces_the_first() {
        let mut set = ScorerSet::new();
        set.set_decisive(FixedScorer(4));
        set.set_decisive(FixedScorer(1));

        assert_eq!(set.decisive_score(""), 1);
    }

    #[test]
    fn ordinary_scorers_stack_and_allow_duplicates() {
        let mut set = ScorerSet::new();
        set.push_ordinary(FixedScorer(1));
        set.push_ordinary(FixedScorer(1));
        set.push_ordinary(FixedScorer(2));

        assert_eq!(set.ordinary_score(""), 4);
    }

    #[test]
    fn ordinary_registration_order_does_not_change_the_total() {
        let mut forward = ScorerSet::new();
        forward.set_decisive(WordScorer::new());
        forward.push_ordinary(LengthScorer::new());
        forward.push_ordinary(WordScorer::new());

        let mut reversed = ScorerSet::new();
        reversed.set_decisive(WordScorer::new());
        reversed.push_ordinary(WordScorer::new());
        reversed.push_ordinary(LengthScorer::new());

        for text in ["", "a cat", "no match here", "cats cats cats"] {
            assert_eq!(forward.total_score(text), reversed.total_score(text));
        }
    }
}
