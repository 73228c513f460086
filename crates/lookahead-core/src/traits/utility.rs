use crate::data::{Dataset, Observations};
use crate::errors::SearchResult;

use super::IProbabilityModel;

/// True utility of a realized training set.
pub trait IUtility: Send + Sync {
    fn utility(&self, data: &Dataset, obs: &Observations) -> SearchResult<f64>;
}

/// Expected utility of adding a candidate before its label is known.
pub trait IExpectedUtility: Send + Sync {
    /// Expected utility of `obs` plus `candidate`, marginalising the
    /// candidate's label under `model`.
    fn expected_utility(
        &self,
        data: &Dataset,
        obs: &Observations,
        model: &dyn IProbabilityModel,
        candidate: usize,
    ) -> SearchResult<f64>;

    /// Upper bound on what `remaining` further steps can add on top of any
    /// one-step expected utility from `obs`. `None` disables pruning.
    fn future_gain_bound(
        &self,
        _data: &Dataset,
        _obs: &Observations,
        _model: &dyn IProbabilityModel,
        _remaining: usize,
    ) -> SearchResult<Option<f64>> {
        Ok(None)
    }
}
