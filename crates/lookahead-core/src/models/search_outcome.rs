use serde::{Deserialize, Serialize};

use super::StepRecord;

/// Result of a completed controller run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Index queried at each step, in query order.
    pub chosen: Vec<usize>,
    /// True utility of the training set immediately after each query.
    pub utilities: Vec<f64>,
    /// Per-step diagnostics, parallel to `chosen`.
    pub steps: Vec<StepRecord>,
    /// Final training set: the initial indices followed by `chosen`.
    pub train_ind: Vec<usize>,
    /// Positive labels in the initial training set.
    pub seed_positives: usize,
}

impl SearchOutcome {
    /// Number of positives revealed by the queries, excluding the seed set.
    pub fn positives_found(&self) -> usize {
        self.steps
            .last()
            .map_or(0, |s| s.positives - self.seed_positives)
    }

    /// Expected utility predicted at each step, parallel to `utilities`.
    pub fn expected_utilities(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.expected_utility).collect()
    }
}
