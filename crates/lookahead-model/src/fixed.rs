//! Constant-probability model.

use lookahead_core::errors::{ModelError, SearchResult};
use lookahead_core::{IProbabilityModel, Observations, Probability};

/// Returns the same probability for every point regardless of observations.
/// Its bound is the probability itself, since observations never move it.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbabilityModel {
    probability: Probability,
}

impl FixedProbabilityModel {
    pub fn new(probability: f64) -> Result<Self, ModelError> {
        Ok(Self {
            probability: Probability::new(probability)?,
        })
    }
}

impl IProbabilityModel for FixedProbabilityModel {
    fn probability(&self, _obs: &Observations, _test: usize) -> SearchResult<Probability> {
        Ok(self.probability)
    }

    fn probability_bound(&self, _obs: &Observations, _test: usize, _additional_positives: usize) -> SearchResult<Probability> {
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
