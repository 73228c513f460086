//! Config-driven experiment harness.
//!
//! Wires a [`LookaheadConfig`] into a full run: graph, k-NN model, count
//! utilities, the configured strategy table, and the controller.

use std::sync::Arc;

use lookahead_core::config::{SearchConfig, StrategyKind};
use lookahead_core::errors::SearchResult;
use lookahead_core::{Dataset, ISelector, LookaheadConfig, Responses, SearchOutcome};
use lookahead_graph::{GraphBuilder, WeightGraph};
use lookahead_model::KnnModel;
use lookahead_selection::{ArgmaxSelector, CountUtility, ExpectedCountUtility, LookaheadSelector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::{validate_budget, ActiveSearch};

/// A configured experiment over one labeled pool.
pub struct Experiment {
    config: LookaheadConfig,
    data: Dataset,
    responses: Responses,
    graph: Arc<WeightGraph>,
    search: ActiveSearch,
}

impl Experiment {
    /// Validate `config` and build everything a run needs.
    pub fn from_config(config: &LookaheadConfig, data: Dataset, responses: Responses) -> SearchResult<Self> {
        config.validate()?;
        let graph = Arc::new(GraphBuilder::from_config(&config.graph)?.build(&data)?);
        debug!(edges = graph.edge_count(), "graph ready");

        let model = KnnModel::from_config(Arc::clone(&graph), &config.model)?;
        let search = ActiveSearch::new(
            build_strategies(&config.search),
            Arc::new(model),
            Box::new(ExpectedCountUtility),
            Box::new(CountUtility),
        )?;
        Ok(Self {
            config: config.clone(),
            data,
            responses,
            graph,
            search,
        })
    }

    pub fn config(&self) -> &LookaheadConfig {
        &self.config
    }

    pub fn graph(&self) -> &WeightGraph {
        &self.graph
    }

    /// Run the configured budget from `train_ind`. The budget is checked
    /// against the unlabeled pool before any query is made.
    pub fn run(&self, train_ind: &[usize]) -> SearchResult<ExperimentReport> {
        let search = &self.config.search;
        validate_budget(&self.responses, train_ind, search.num_evaluations)?;
        let outcome = self.search.run(
            &self.data,
            &self.responses,
            train_ind,
            search.num_evaluations,
            search.lookahead,
            search.verbose,
        )?;
        let report = ExperimentReport {
            points: self.data.len(),
            edges: self.graph.edge_count(),
            total_positives: self.responses.positives(),
            num_evaluations: search.num_evaluations,
            lookahead: search.lookahead,
            strategies: self.search.strategy_names(),
            positives_found: outcome.positives_found(),
            outcome,
        };
        info!(
            positives_found = report.positives_found,
            total_positives = report.total_positives,
            num_evaluations = report.num_evaluations,
            "experiment complete"
        );
        Ok(report)
    }
}

fn build_strategies(search: &SearchConfig) -> Vec<Box<dyn ISelector>> {
    search
        .strategies
        .iter()
        .map(|kind| -> Box<dyn ISelector> {
            match kind {
                StrategyKind::Argmax => Box::new(ArgmaxSelector::new()),
                StrategyKind::Lookahead => Box::new(LookaheadSelector::from_config(search)),
            }
        })
        .collect()
}

/// Summary of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub points: usize,
    pub edges: usize,
    pub total_positives: usize,
    pub num_evaluations: usize,
    pub lookahead: usize,
    pub strategies: Vec<String>,
    /// Positives revealed by the queries, excluding the seed set.
    pub positives_found: usize,
    pub outcome: SearchOutcome,
}

impl ExperimentReport {
    pub fn to_json(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SearchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
