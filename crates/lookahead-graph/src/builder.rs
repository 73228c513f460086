//! [`GraphBuilder`]: k-NN → mutual filter → MST augmentation → weighting.

use std::collections::BTreeMap;

use lookahead_core::config::GraphConfig;
use lookahead_core::errors::GraphError;
use lookahead_core::Dataset;
use tracing::{debug, info_span};

use crate::knn;
use crate::mst;
use crate::weight_graph::WeightGraph;
use crate::weights::WeightFunction;

/// Builds a connected [`WeightGraph`] from a dataset.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    k: usize,
    mutual: bool,
    weight: WeightFunction,
    min_weight: f64,
}

impl GraphBuilder {
    /// Builder with `k` neighbours, mutual filtering, and the default Gaussian weight.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            mutual: true,
            weight: WeightFunction::default(),
            min_weight: lookahead_core::config::defaults::DEFAULT_MIN_WEIGHT,
        }
    }

    pub fn from_config(config: &GraphConfig) -> Result<Self, GraphError> {
        if !(config.min_weight > 0.0 && config.min_weight.is_finite()) {
            return Err(GraphError::InvalidParameter {
                reason: format!("min_weight must be positive and finite, got {}", config.min_weight),
            });
        }
        Ok(Self {
            k: config.k,
            mutual: config.mutual,
            weight: WeightFunction::from_config(config.weight)?,
            min_weight: config.min_weight,
        })
    }

    pub fn with_mutual(mut self, mutual: bool) -> Self {
        self.mutual = mutual;
        self
    }

    pub fn with_weight(mut self, weight: WeightFunction) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = min_weight;
        self
    }

    /// Build the graph. Fails for `k == 0` or `k >= N`, and if the result is
    /// not connected.
    pub fn build(&self, data: &Dataset) -> Result<WeightGraph, GraphError> {
        let n = data.len();
        let _span = info_span!("lookahead.graph", points = n, k = self.k).entered();
        if self.k == 0 || self.k >= n {
            return Err(GraphError::InvalidNeighbourCount { k: self.k, points: n });
        }

        let neighbours = knn::nearest_neighbours(data, self.k);
        let mut distances: BTreeMap<(usize, usize), f64> = knn::neighbour_edges(&neighbours, self.mutual);
        let knn_edges = distances.len();

        let tree = mst::minimum_spanning_tree(data);
        for &(a, b, d) in &tree {
            distances.entry((a.min(b), a.max(b))).or_insert(d);
        }
        debug!(
            knn_edges,
            mst_edges = tree.len(),
            total_edges = distances.len(),
            "graph edges assembled"
        );

        let edges: Vec<(usize, usize, f64)> = distances
            .into_iter()
            .map(|((i, j), d)| (i, j, self.weight.apply(d).max(self.min_weight)))
            .collect();
        let graph = WeightGraph::from_edges(n, &edges)?;

        let components = graph.component_count();
        if components != 1 {
            return Err(GraphError::Disconnected { components });
        }
        Ok(graph)
    }
}
