use crate::data::{Dataset, Observations};
use crate::errors::SearchResult;
use crate::models::Selection;

use super::{IExpectedUtility, IProbabilityModel};

/// Point-selection strategy.
///
/// Implementations search only over points not in `obs`, break ties towards
/// the lowest index, and fail with `SelectionError::NoCandidates` when every
/// point is already observed.
pub trait ISelector: Send + Sync {
    /// Choose the next point to query, simulating `lookahead` steps.
    fn select(
        &self,
        data: &Dataset,
        obs: &Observations,
        model: &dyn IProbabilityModel,
        expected_utility: &dyn IExpectedUtility,
        lookahead: usize,
        verbose: bool,
    ) -> SearchResult<Selection>;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}
