use crate::board::DartboardSection;
use serde::{Deserialize, Serialize};

/// A candidate dart: the section to aim at, what it scores, and how often
/// the player has historically hit it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTarget {
    pub section: DartboardSection,
    pub score: u32,
    pub accuracy: f64,
}

/// Up to three darts in order, with the probability of hitting all of them
/// (treated as independent) and the leg's remaining score afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPath {
    pub targets: Vec<CheckoutTarget>,
    pub total_accuracy: f64,
    pub remaining_score: u32,
}

impl CheckoutPath {
    /// True when throwing the whole path finishes the leg.
    pub fn is_checkout(&self) -> bool {
        self.remaining_score == 0
    }

    pub fn first(&self) -> Option<&CheckoutTarget> {
        self.targets.first()
    }

    pub fn total_score(&self) -> u32 {
        self.targets.iter().map(|t| t.score).sum()
    }
}
