//! Opinion vocabulary and the score-to-opinion resolution policy.
//!
//! The vocabulary is a fixed ordered scale of five labels; index
//! position encodes increasing credibility. The resolver applies a
//! two-tier policy: when the decisive signal clears the significance
//! threshold it alone determines the opinion, otherwise the combined
//! signal can at most reach "unreliable".

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// The fixed ordered opinion scale, least to most credible.
///
/// Variant order is an invariant: it is relied on for index lookups
/// and for `Ord` comparisons between opinions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opinion {
    Unassessable,
    Unreliable,
    Plausible,
    Believable,
    Credible,
}

impl Opinion {
    /// Number of labels in the vocabulary.
    pub const COUNT: usize = 5;

    /// Look up an opinion by scale index, clamping past the top.
    ///
    /// Indices at or beyond the vocabulary size resolve to the most
    /// credible label rather than overflowing the scale.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Opinion::Unassessable,
            1 => Opinion::Unreliable,
            2 => Opinion::Plausible,
            3 => Opinion::Believable,
            _ => Opinion::Credible,
        }
    }

    /// Position of this label on the scale (0..=4).
    pub fn index(self) -> usize {
        match self {
            Opinion::Unassessable => 0,
            Opinion::Unreliable => 1,
            Opinion::Plausible => 2,
            Opinion::Believable => 3,
            Opinion::Credible => 4,
        }
    }

    /// The lowercase label used in rendered assessments.
    pub fn as_str(self) -> &'static str {
        match self {
            Opinion::Unassessable => "unassessable",
            Opinion::Unreliable => "unreliable",
            Opinion::Plausible => "plausible",
            Opinion::Believable => "believable",
            Opinion::Credible => "credible",
        }
    }
}

impl fmt::Display for Opinion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decisive score at or above this value drives the opinion on its own.
pub const SIGNIFICANCE_THRESHOLD: u32 = 2;

/// Maps a decisive and an ordinary score to an opinion label.
#[derive(Debug, Clone, Copy)]
pub struct OpinionResolver {
    threshold: u32,
}

impl OpinionResolver {
    pub fn new() -> Self {
        Self {
            threshold: SIGNIFICANCE_THRESHOLD,
        }
    }

    /// Resolve an opinion from the two score views.
    ///
    /// A decisive score meeting the significance threshold indexes the
    /// scale directly (clamped at the top). Below the threshold the
    /// combined score can only distinguish "unreliable" from
    /// "unassessable": a weak decisive signal is never allowed to be
    /// promoted past that by ordinary scorers.
    pub fn resolve(&self, decisive: u32, ordinary: u32) -> Opinion {
        let opinion = if decisive >= self.threshold {
            Opinion::from_index(decisive as usize)
        } else if decisive + ordinary >= 1 {
            Opinion::Unreliable
        } else {
            Opinion::Unassessable
        };

        trace!(decisive, ordinary, %opinion, "resolved opinion");
        opinion
    }
}

impl Default for OpinionResolver {
    fn default() -> Self {
        Self::new()
    }
}
