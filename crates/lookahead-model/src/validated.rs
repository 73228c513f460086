//! Contract-checking wrapper for externally supplied models.

use lookahead_core::constants::BOUND_TOLERANCE;
use lookahead_core::errors::{ModelError, SearchResult};
use lookahead_core::{IProbabilityModel, Observations, Probability};
use tracing::warn;

/// Wraps a model and fails if its bound ever falls below its probability.
///
/// [`Probability`] already rejects values outside [0, 1]; this adds the
/// `p_upper ∈ [p, 1]` half of the contract, at the cost of one extra
/// `probability` call per bound.
#[derive(Debug, Clone)]
pub struct ValidatedModel<M> {
    inner: M,
}

impl<M: IProbabilityModel> ValidatedModel<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: IProbabilityModel> IProbabilityModel for ValidatedModel<M> {
    fn probability(&self, obs: &Observations, test: usize) -> SearchResult<Probability> {
        self.inner.probability(obs, test)
    }

    fn probability_bound(
        &self,
        obs: &Observations,
        test: usize,
        additional_positives: usize,
    ) -> SearchResult<Probability> {
        let p = self.inner.probability(obs, test)?;
        let bound = self.inner.probability_bound(obs, test, additional_positives)?;
        if bound.value() < p.value() - BOUND_TOLERANCE {
            warn!(
                model = self.inner.name(),
                test,
                probability = p.value(),
                bound = bound.value(),
                "probability bound below probability"
            );
            return Err(ModelError::BoundBelowProbability {
                index: test,
                probability: p.value(),
                bound: bound.value(),
            }
            .into());
        }
        Ok(bound)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
