use serde::{Deserialize, Serialize};

use super::defaults;

/// k-NN probability model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Smoothing mass added to every estimate.
    pub pseudocount: f64,
    /// Probability the pseudocount mass votes for the positive class.
    pub prior: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            pseudocount: defaults::DEFAULT_PSEUDOCOUNT,
            prior: defaults::DEFAULT_PRIOR,
        }
    }
}
