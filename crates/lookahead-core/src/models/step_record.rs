use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Diagnostics for one controller step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number.
    pub step: usize,
    /// Point queried at this step.
    pub index: usize,
    /// Lookahead depth actually used for this step.
    pub effective_lookahead: usize,
    /// Name of the strategy that made the choice.
    pub strategy: String,
    /// Utility the strategy expected before the label was revealed.
    pub expected_utility: f64,
    /// Utility of the training set after the label was revealed.
    pub true_utility: f64,
    /// Positive labels among the training set after this step.
    pub positives: usize,
    /// Size of the training set after this step.
    pub labeled: usize,
    pub elapsed: Duration,
}

impl StepRecord {
    /// Fraction of labeled points that are positive.
    pub fn positive_fraction(&self) -> f64 {
        if self.labeled == 0 {
            0.0
        } else {
            self.positives as f64 / self.labeled as f64
        }
    }
}
