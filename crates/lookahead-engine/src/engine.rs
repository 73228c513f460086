//! ActiveSearch: the sequential query loop.
//!
//! Each step picks the strategy for the current effective depth, asks it for
//! a point, reveals that point's label from the oracle, and records the true
//! utility. Steps never overlap; only a strategy may parallelise internally.

use std::sync::Arc;
use std::time::Instant;

use lookahead_core::errors::{ConfigError, SearchError, SearchResult, SelectionError};
use lookahead_core::{
    Dataset, IExpectedUtility, IProbabilityModel, ISelector, IUtility, Observations, Responses,
    SearchOutcome, StepRecord,
};
use tracing::info;

use crate::strategy_table::{effective_lookahead, strategy_for_depth};
use crate::{search_span, selection_span, step_span};

/// Sequential active search controller.
pub struct ActiveSearch {
    strategies: Vec<Box<dyn ISelector>>,
    model: Arc<dyn IProbabilityModel>,
    expected_utility: Box<dyn IExpectedUtility>,
    utility: Box<dyn IUtility>,
}

impl ActiveSearch {
    /// `strategies[d - 1]` serves effective depth `d`; the last entry serves
    /// every deeper request. The list must be non-empty.
    pub fn new(
        strategies: Vec<Box<dyn ISelector>>,
        model: Arc<dyn IProbabilityModel>,
        expected_utility: Box<dyn IExpectedUtility>,
        utility: Box<dyn IUtility>,
    ) -> SearchResult<Self> {
        if strategies.is_empty() {
            return Err(ConfigError::EmptyStrategies.into());
        }
        Ok(Self {
            strategies,
            model,
            expected_utility,
            utility,
        })
    }

    pub fn strategies(&self) -> &[Box<dyn ISelector>] {
        &self.strategies
    }

    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn model(&self) -> &dyn IProbabilityModel {
        self.model.as_ref()
    }

    /// Run `num_evaluations` queries starting from the labeled `train_ind`.
    ///
    /// Fails before the first step on a zero lookahead, a label vector whose
    /// length differs from the dataset, or an invalid training index. Running
    /// out of candidates mid-run fails with `SelectionError::Exhausted`, which
    /// carries the indices chosen by the steps that completed.
    pub fn run(
        &self,
        data: &Dataset,
        responses: &Responses,
        train_ind: &[usize],
        num_evaluations: usize,
        lookahead: usize,
        verbose: bool,
    ) -> SearchResult<SearchOutcome> {
        if lookahead == 0 {
            return Err(ConfigError::InvalidLookahead { lookahead }.into());
        }
        if responses.len() != data.len() {
            return Err(ConfigError::LengthMismatch {
                what: "responses".to_string(),
                expected: data.len(),
                actual: responses.len(),
            }
            .into());
        }
        let mut obs = Observations::from_responses(responses, train_ind)?;
        let seed_positives = obs.positive_count();

        let _run = search_span!(num_evaluations, lookahead).entered();
        let mut chosen = Vec::with_capacity(num_evaluations);
        let mut utilities = Vec::with_capacity(num_evaluations);
        let mut steps = Vec::with_capacity(num_evaluations);

        for step in 1..=num_evaluations {
            let started = Instant::now();
            let depth = effective_lookahead(lookahead, num_evaluations, step);
            let _step = step_span!(step, depth).entered();
            let strategy = strategy_for_depth(&self.strategies, depth).ok_or(ConfigError::EmptyStrategies)?;

            let selection = {
                let _select = selection_span!(strategy.name(), depth).entered();
                match strategy.select(
                    data,
                    &obs,
                    self.model.as_ref(),
                    self.expected_utility.as_ref(),
                    depth,
                    verbose,
                ) {
                    Ok(selection) => selection,
                    Err(SearchError::SelectionError(SelectionError::NoCandidates)) => {
                        return Err(SelectionError::Exhausted {
                            step,
                            completed: chosen,
                        }
                        .into());
                    }
                    Err(e) => return Err(e),
                }
            };

            let index = selection.index;
            let label = responses.label(index).ok_or_else(|| SelectionError::OutOfPool {
                strategy: strategy.name().to_string(),
                index,
                len: data.len(),
            })?;
            if obs.contains(index) {
                return Err(SelectionError::AlreadyObserved {
                    strategy: strategy.name().to_string(),
                    index,
                }
                .into());
            }
            obs.observe(index, label)?;
            chosen.push(index);

            let true_utility = self.utility.utility(data, &obs)?;
            utilities.push(true_utility);

            let record = StepRecord {
                step,
                index,
                effective_lookahead: depth,
                strategy: strategy.name().to_string(),
                expected_utility: selection.expected_utility,
                true_utility,
                positives: obs.positive_count(),
                labeled: obs.len(),
                elapsed: started.elapsed(),
            };
            if verbose {
                info!(
                    step,
                    index,
                    strategy = %record.strategy,
                    expected_utility = record.expected_utility,
                    true_utility,
                    positives = record.positives,
                    labeled = record.labeled,
                    elapsed_ms = record.elapsed.as_secs_f64() * 1000.0,
                    "search step"
                );
            }
            steps.push(record);
        }

        Ok(SearchOutcome {
            chosen,
            utilities,
            steps,
            train_ind: obs.indices().to_vec(),
            seed_positives,
        })
    }
}

/// Reject a budget larger than the unlabeled pool, along with invalid
/// training indices.
pub fn validate_budget(responses: &Responses, train_ind: &[usize], num_evaluations: usize) -> SearchResult<()> {
    let seed = Observations::from_responses(responses, train_ind)?;
    let available = responses.len() - seed.len();
    if num_evaluations > available {
        return Err(ConfigError::BudgetExceedsPool {
            budget: num_evaluations,
            available,
        }
        .into());
    }
    Ok(())
}
