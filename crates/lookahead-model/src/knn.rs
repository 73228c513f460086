//! Weighted neighbour voting with pseudocount smoothing.
//!
//! ```text
//! p(i) = (γ·π + Σ_{j observed, y_j = 1} w_ij) / (γ + Σ_{j observed} w_ij)
//! ```
//!
//! Bound after at most n further positives, with m_i = max_j w_ij:
//!
//! ```text
//! p̄_n(i) = (a + n·m_i) / (b + n·m_i)
//! ```
//!
//! where a and b are the numerator and denominator above. A new positive
//! neighbour with weight w ≤ m_i moves the ratio towards 1 by at most that
//! much, and a new negative neighbour only lowers it.

use std::sync::Arc;

use lookahead_core::config::ModelConfig;
use lookahead_core::constants::BOUND_TOLERANCE;
use lookahead_core::errors::{ModelError, SearchResult};
use lookahead_core::{IProbabilityModel, Observations, Probability};
use lookahead_graph::WeightGraph;

/// k-NN probability model over a shared weight graph.
#[derive(Debug, Clone)]
pub struct KnnModel {
    graph: Arc<WeightGraph>,
    pseudocount: f64,
    prior: f64,
}

impl KnnModel {
    /// Create a model. `pseudocount` must be positive and `prior` in (0, 1).
    pub fn new(graph: Arc<WeightGraph>, pseudocount: f64, prior: f64) -> Result<Self, ModelError> {
        if !(pseudocount > 0.0 && pseudocount.is_finite()) {
            return Err(ModelError::InvalidParameter {
                name: "pseudocount".to_string(),
                reason: format!("must be positive and finite, got {pseudocount}"),
            });
        }
        if !(prior > 0.0 && prior < 1.0) {
            return Err(ModelError::InvalidParameter {
                name: "prior".to_string(),
                reason: format!("must be strictly between 0 and 1, got {prior}"),
            });
        }
        Ok(Self {
            graph,
            pseudocount,
            prior,
        })
    }

    pub fn from_config(graph: Arc<WeightGraph>, config: &ModelConfig) -> Result<Self, ModelError> {
        Self::new(graph, config.pseudocount, config.prior)
    }

    pub fn graph(&self) -> &WeightGraph {
        &self.graph
    }

    /// Smoothed (positive mass, total mass) voting for `test`.
    fn votes(&self, obs: &Observations, test: usize) -> Result<(f64, f64), ModelError> {
        if test >= self.graph.len() {
            return Err(ModelError::IndexOutOfRange {
                index: test,
                len: self.graph.len(),
            });
        }
        let mut positive = self.pseudocount * self.prior;
        let mut total = self.pseudocount;
        for &(j, w) in self.graph.neighbours(test) {
            if let Some(label) = obs.label_of(j) {
                total += w;
                if label {
                    positive += w;
                }
            }
        }
        Ok((positive, total))
    }
}

impl IProbabilityModel for KnnModel {
    fn probability(&self, obs: &Observations, test: usize) -> SearchResult<Probability> {
        let (positive, total) = self.votes(obs, test)?;
        Ok(Probability::new(positive / total)?)
    }

    fn probability_bound(
        &self,
        obs: &Observations,
        test: usize,
        additional_positives: usize,
    ) -> SearchResult<Probability> {
        let (positive, total) = self.votes(obs, test)?;
        let p = positive / total;
        let extra = additional_positives as f64 * self.graph.max_weight(test);
        let bound = (positive + extra) / (total + extra);
        if bound < p - BOUND_TOLERANCE {
            return Err(ModelError::BoundBelowProbability {
                index: test,
                probability: p,
                bound,
            }
            .into());
        }
        Ok(Probability::new(bound.max(p))?)
    }

    fn name(&self) -> &str {
        "knn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path 0 - 1 - 2 with weights 1.0 and 0.5.
    fn path_model() -> KnnModel {
        let graph = WeightGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 0.5)]).unwrap();
        KnnModel::new(Arc::new(graph), 0.1, 0.05).unwrap()
    }

    #[test]
    fn no_observations_gives_prior() {
        let model = path_model();
        let p = model.probability(&Observations::new(), 1).unwrap();
        assert!((p.value() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn positive_neighbour_raises_probability() {
        let model = path_model();
        let mut obs = Observations::new();
        obs.observe(0, true).unwrap();
        let p = model.probability(&obs, 1).unwrap().value();
        // (0.1*0.05 + 1.0) / (0.1 + 1.0)
        assert!((p - 1.005 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn negative_neighbour_lowers_probability() {
        let model = path_model();
        let mut obs = Observations::new();
        obs.observe(2, false).unwrap();
        let p = model.probability(&obs, 1).unwrap().value();
        assert!(p < 0.05);
    }

    #[test]
    fn bound_with_zero_extra_equals_probability() {
        let model = path_model();
        let mut obs = Observations::new();
        obs.observe(0, true).unwrap();
        let p = model.probability(&obs, 1).unwrap();
        let b = model.probability_bound(&obs, 1, 0).unwrap();
        assert_eq!(p, b);
    }

    #[test]
    fn bound_dominates_revealed_positive() {
        let model = path_model();
        let obs = Observations::new();
        let bound = model.probability_upper_bound(&obs, 1).unwrap().value();
        let mut after = Observations::new();
        after.observe(0, true).unwrap();
        let actual = model.probability(&after, 1).unwrap().value();
        assert!(actual <= bound + 1e-12);
    }

    #[test]
    fn out_of_range_point_is_an_error() {
        let model = path_model();
        assert!(model.probability(&Observations::new(), 9).is_err());
    }

    #[test]
    fn rejects_invalid_parameters() {
        let graph = Arc::new(WeightGraph::from_edges(2, &[(0, 1, 1.0)]).unwrap());
        assert!(KnnModel::new(graph.clone(), 0.0, 0.5).is_err());
        assert!(KnnModel::new(graph.clone(), 1.0, 0.0).is_err());
        assert!(KnnModel::new(graph, 1.0, 1.0).is_err());
    }
}
