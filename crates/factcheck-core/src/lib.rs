//! # factcheck-core
//!
//! Deterministic credibility assessment engine for short fact
//! statements.
//!
//! The engine combines pluggable scorers under two summation scopes: a
//! single decisive scorer whose signal can determine the opinion on
//! its own, and ordinary scorers that only matter when the decisive
//! signal is weak. The aggregate score is clamped to `[0, 5]` and the
//! opinion comes from a fixed five-label scale.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Total**: Every input, including the empty string, has a
//!    defined score and opinion; there are no error cases
//! 3. **Read-only**: A constructed assessor holds no mutable state and
//!    is safe to share across concurrent callers
//!
//! ## Example
//!
//! ```rust
//! use factcheck_core::{Assessor, DefaultAssessor, Opinion};
//!
//! let assessor = DefaultAssessor::default();
//! let text = "this is a short sentence with cat";
//!
//! assert_eq!(assessor.score(text), 3);
//! assert_eq!(assessor.opinion(text), Opinion::Plausible);
//! ```

pub mod assessor;
pub mod opinion;
pub mod scorers;

// Re-export main types at crate root
pub use assessor::{Assessment, Assessor, DefaultAssessor};
pub use opinion::{Opinion, OpinionResolver, SIGNIFICANCE_THRESHOLD};
pub use scorers::{LengthScorer, Scorer, ScorerSet, WordScorer};

/// Assess a text with the standard scorer configuration.
///
/// Convenience entry point for callers that do not need to hold an
/// assessor instance.
pub fn assess(text: &str) -> Assessment {
    DefaultAssessor::default().assess(text)
}
