//! Nonmyopic l-step lookahead.
//!
//! The value of querying `x` with `l` steps left is
//!
//! ```text
//! v(x, 1) = expected_utility(obs, x)
//! v(x, l) = p(x) · max_y v_{obs ∪ {x:1}}(y, l-1) + (1 - p(x)) · max_y v_{obs ∪ {x:0}}(y, l-1)
//! ```
//!
//! Hypothetical labels are pushed onto one working [`Observations`] and
//! retracted on the way back up, so a search of depth l never holds more than
//! l simulated observations.
//!
//! With pruning on, candidates at each node are visited in descending order of
//! one-step expected utility and the scan stops once
//! `expected_utility(x) + future_gain_bound(l-1)` falls below the best value
//! found so far. A pruned candidate can never be the maximiser, so pruned and
//! exhaustive searches return the same [`Selection`].

use std::sync::atomic::{AtomicUsize, Ordering};

use lookahead_core::config::{defaults, SearchConfig};
use lookahead_core::constants::PRUNING_TOLERANCE;
use lookahead_core::errors::{SearchResult, SelectionError};
use lookahead_core::{Dataset, IExpectedUtility, IProbabilityModel, ISelector, Observations, Selection};
use rayon::prelude::*;
use tracing::debug;

use super::{candidates, checked};

/// l-step lookahead strategy.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadSelector {
    pruning: bool,
    parallel: bool,
}

impl LookaheadSelector {
    pub fn new() -> Self {
        Self {
            pruning: defaults::DEFAULT_PRUNING,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            pruning: config.pruning,
            parallel: config.parallel,
        }
    }

    /// Enable or disable branch-and-bound pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Evaluate top-level candidates on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for LookaheadSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ISelector for LookaheadSelector {
    fn select(
        &self,
        data: &Dataset,
        obs: &Observations,
        model: &dyn IProbabilityModel,
        expected_utility: &dyn IExpectedUtility,
        lookahead: usize,
        verbose: bool,
    ) -> SearchResult<Selection> {
        let pool = candidates(data, obs)?;
        // The recursion observes one point per level.
        let depth = lookahead.max(1).min(pool.len());

        let search = Search {
            data,
            model,
            expected_utility,
            pruning: self.pruning,
            evaluated: AtomicUsize::new(0),
            pruned: AtomicUsize::new(0),
        };

        let selection = if self.parallel && depth > 1 && pool.len() > 1 {
            let results: Vec<SearchResult<Selection>> = pool
                .par_iter()
                .map(|&x| {
                    let mut local = obs.clone();
                    let value = search.value(&mut local, x, depth)?;
                    checked(x, value)
                })
                .collect();
            let mut best: Option<Selection> = None;
            for result in results {
                let selection = result?;
                best = Some(best.map_or(selection, |b| b.better(selection)));
            }
            best.ok_or(SelectionError::NoCandidates)?
        } else {
            let mut working = obs.clone();
            search.best(&mut working, depth)?
        };

        if verbose {
            debug!(
                index = selection.index,
                expected_utility = selection.expected_utility,
                depth,
                evaluated = search.evaluated.load(Ordering::Relaxed),
                pruned = search.pruned.load(Ordering::Relaxed),
                "lookahead selection"
            );
        }
        Ok(selection)
    }

    fn name(&self) -> &str {
        "lookahead"
    }
}

/// Shared read-only state for one selection, plus node counters.
struct Search<'a> {
    data: &'a Dataset,
    model: &'a dyn IProbabilityModel,
    expected_utility: &'a dyn IExpectedUtility,
    pruning: bool,
    evaluated: AtomicUsize,
    pruned: AtomicUsize,
}

impl Search<'_> {
    /// Value of querying `x` next with `depth` queries left, `x` included.
    fn value(&self, obs: &mut Observations, x: usize, depth: usize) -> SearchResult<f64> {
        self.evaluated.fetch_add(1, Ordering::Relaxed);
        if depth <= 1 {
            return self.expected_utility.expected_utility(self.data, obs, self.model, x);
        }
        let p = self.model.probability(obs, x)?.value();
        let if_positive = self.branch(obs, x, true, depth - 1)?;
        let if_negative = self.branch(obs, x, false, depth - 1)?;
        Ok(p * if_positive + (1.0 - p) * if_negative)
    }

    /// Best value after hypothetically labeling `x` with `label`.
    fn branch(&self, obs: &mut Observations, x: usize, label: bool, depth: usize) -> SearchResult<f64> {
        obs.observe(x, label)?;
        let best = self.best(obs, depth);
        obs.retract();
        Ok(best?.expected_utility)
    }

    /// Best candidate from `obs` with `depth` queries left.
    fn best(&self, obs: &mut Observations, depth: usize) -> SearchResult<Selection> {
        let pool = candidates(self.data, obs)?;
        let mut best: Option<Selection> = None;

        if depth <= 1 || !self.pruning {
            for x in pool {
                let selection = checked(x, self.value(obs, x, depth)?)?;
                best = Some(best.map_or(selection, |b| b.better(selection)));
            }
            return best.ok_or_else(|| SelectionError::NoCandidates.into());
        }

        let mut ranked = Vec::with_capacity(pool.len());
        for x in pool {
            let eu = self.expected_utility.expected_utility(self.data, obs, self.model, x)?;
            ranked.push(checked(x, eu)?);
        }
        ranked.sort_by(|a, b| {
            b.expected_utility
                .total_cmp(&a.expected_utility)
                .then(a.index.cmp(&b.index))
        });
        let bound = self
            .expected_utility
            .future_gain_bound(self.data, obs, self.model, depth - 1)?;

        for (rank, candidate) in ranked.iter().enumerate() {
            if let (Some(bound), Some(current)) = (bound, best) {
                if candidate.expected_utility + bound < current.expected_utility - PRUNING_TOLERANCE {
                    self.pruned.fetch_add(ranked.len() - rank, Ordering::Relaxed);
                    break;
                }
            }
            let selection = checked(candidate.index, self.value(obs, candidate.index, depth)?)?;
            best = Some(best.map_or(selection, |b| b.better(selection)));
        }
        best.ok_or_else(|| SelectionError::NoCandidates.into())
    }
}
