use crate::data::{Observations, Probability};
use crate::errors::SearchResult;

/// Label model: probability that an unobserved point is positive given the
/// observations so far.
pub trait IProbabilityModel: Send + Sync {
    /// P(label of `test` = 1 | `obs`).
    fn probability(&self, obs: &Observations, test: usize) -> SearchResult<Probability>;

    /// Upper bound on `probability(obs', test)` for any `obs'` that extends
    /// `obs` with at most `additional_positives` positive observations (and
    /// any number of negative ones).
    ///
    /// Must equal `probability` when `additional_positives == 0` and be
    /// non-decreasing in `additional_positives`.
    fn probability_bound(
        &self,
        obs: &Observations,
        test: usize,
        additional_positives: usize,
    ) -> SearchResult<Probability>;

    /// Bound after a single further positive observation.
    fn probability_upper_bound(&self, obs: &Observations, test: usize) -> SearchResult<Probability> {
        self.probability_bound(obs, test, 1)
    }

    /// Human-readable model name.
    fn name(&self) -> &str;
}
