use lookahead_core::errors::{SearchResult, SelectionError};
use lookahead_core::{Dataset, IExpectedUtility, IProbabilityModel, ISelector, Observations, Selection};
use tracing::debug;

use super::{candidates, checked};

/// One-step (myopic) strategy: the candidate with the highest expected utility.
///
/// The `lookahead` argument is ignored. The controller routes depth-1 steps
/// here through its strategy table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgmaxSelector;

impl ArgmaxSelector {
    pub fn new() -> Self {
        Self
    }
}

impl ISelector for ArgmaxSelector {
    fn select(
        &self,
        data: &Dataset,
        obs: &Observations,
        model: &dyn IProbabilityModel,
        expected_utility: &dyn IExpectedUtility,
        _lookahead: usize,
        verbose: bool,
    ) -> SearchResult<Selection> {
        let mut best: Option<Selection> = None;
        for x in candidates(data, obs)? {
            let value = expected_utility.expected_utility(data, obs, model, x)?;
            let selection = checked(x, value)?;
            if verbose {
                debug!(candidate = x, value, "argmax candidate");
            }
            best = Some(best.map_or(selection, |b| b.better(selection)));
        }
        best.ok_or_else(|| SelectionError::NoCandidates.into())
    }

    fn name(&self) -> &str {
        "argmax"
    }
}
