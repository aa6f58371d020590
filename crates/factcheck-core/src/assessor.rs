//! The assessment façade over the scorer registry and the resolver.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::opinion::{Opinion, OpinionResolver};
use crate::scorers::{LengthScorer, ScorerSet, WordScorer};

/// A credibility assessment: the aggregate score and the opinion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: u32,
    pub opinion: Opinion,
}

/// The public assessment capability.
///
/// Both operations are pure functions of the input text and the fixed
/// scorer configuration; they can be called independently and in any
/// order.
pub trait Assessor: Send + Sync {
    /// Calculate the aggregate score for a sentence.
    fn score(&self, text: &str) -> u32;

    /// Form an opinion about a sentence.
    fn opinion(&self, text: &str) -> Opinion;

    /// Score and opinion in one value.
    fn assess(&self, text: &str) -> Assessment {
        Assessment {
            score: self.score(text),
            opinion: self.opinion(text),
        }
    }
}

/// Assessor backed by a [`ScorerSet`] and the fixed resolution policy.
///
/// The configuration is immutable after construction, so one instance
/// is safely reusable across many independent assessment calls.
pub struct DefaultAssessor {
    scorers: ScorerSet,
    resolver: OpinionResolver,
}

impl DefaultAssessor {
    /// Build an assessor over a prepared scorer configuration.
    pub fn new(scorers: ScorerSet) -> Self {
        Self {
            scorers,
            resolver: OpinionResolver::new(),
        }
    }
}

impl Default for DefaultAssessor {
    /// The standard configuration: word occurrences decide, length
    /// only contributes.
    fn default() -> Self {
        let mut scorers = ScorerSet::new();
        scorers.set_decisive(WordScorer::new());
        scorers.push_ordinary(LengthScorer::new());

        Self::new(scorers)
    }
}

impl Assessor for DefaultAssessor {
    fn score(&self, text: &str) -> u32 {
        let score = self.scorers.total_score(text);

        debug!(score, "assessed score");
        score
    }

    fn opinion(&self, text: &str) -> Opinion {
        let decisive = self.scorers.decisive_score(text);
        let ordinary = self.scorers.ordinary_score(text);
        let opinion = self.resolver.resolve(decisive, ordinary);

        debug!(%opinion, "assessed opinion");
        opinion
    }
}
