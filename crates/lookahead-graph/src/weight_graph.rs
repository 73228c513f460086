//! Symmetric sparse weight matrix with per-point maximum incident weight.

use lookahead_core::errors::GraphError;
use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use tracing::warn;

/// Symmetric, sparse, non-negative N×N weight matrix.
///
/// Each row is sorted by neighbour index. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGraph {
    adjacency: Vec<Vec<(usize, f64)>>,
    max_weights: Vec<f64>,
    edge_count: usize,
}

impl WeightGraph {
    /// Build from undirected edges `(i, j, w)`. Each edge is stored in both
    /// directions; a repeated pair keeps the larger weight.
    pub fn from_edges(num_points: usize, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); num_points];
        for &(i, j, w) in edges {
            if i >= num_points || j >= num_points || i == j || !(w > 0.0 && w.is_finite()) {
                return Err(GraphError::InvalidWeight {
                    source_index: i,
                    target_index: j,
                    weight: w,
                });
            }
            adjacency[i].push((j, w));
            adjacency[j].push((i, w));
        }

        let mut edge_count = 0;
        for row in &mut adjacency {
            row.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.total_cmp(&a.1)));
            row.dedup_by_key(|e| e.0);
            edge_count += row.len();
        }
        let isolated = adjacency.iter().filter(|row| row.is_empty()).count();
        if num_points > 1 && isolated > 0 {
            warn!(isolated, num_points, "weight graph has isolated points");
        }
        Ok(Self::with_rows(adjacency, edge_count / 2))
    }

    /// Build from a dense matrix. Zero entries mean "no edge"; the diagonal is
    /// ignored. The matrix must be square and symmetric.
    pub fn from_dense(matrix: &[Vec<f64>]) -> Result<Self, GraphError> {
        let n = matrix.len();
        if let Some(row) = matrix.iter().position(|r| r.len() != n) {
            return Err(GraphError::InvalidParameter {
                reason: format!("row {row} of a {n}x{n} weight matrix has {} entries", matrix[row].len()),
            });
        }
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (w, back) = (matrix[i][j], matrix[j][i]);
                if w < 0.0 || !w.is_finite() {
                    return Err(GraphError::InvalidWeight {
                        source_index: i,
                        target_index: j,
                        weight: w,
                    });
                }
                if w != back {
                    return Err(GraphError::Asymmetric {
                        source_index: i,
                        target_index: j,
                    });
                }
                if w > 0.0 {
                    edges.push((i, j, w));
                }
            }
        }
        Self::from_edges(n, &edges)
    }

    fn with_rows(adjacency: Vec<Vec<(usize, f64)>>, edge_count: usize) -> Self {
        let max_weights = adjacency
            .iter()
            .map(|row| row.iter().map(|e| e.1).fold(0.0, f64::max))
            .collect();
        Self {
            adjacency,
            max_weights,
            edge_count,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbours of `index` with their weights, sorted by neighbour index.
    pub fn neighbours(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }

    pub fn degree(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }

    /// `W[i][j]`, 0.0 when there is no edge.
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        let row = &self.adjacency[i];
        row.binary_search_by_key(&j, |e| e.0)
            .map_or(0.0, |pos| row[pos].1)
    }

    /// Largest weight incident to `index` (0.0 for an isolated point).
    pub fn max_weight(&self, index: usize) -> f64 {
        self.max_weights[index]
    }

    pub fn max_weights(&self) -> &[f64] {
        &self.max_weights
    }

    /// Copy into a petgraph undirected graph; node weights are point indices.
    pub fn to_petgraph(&self) -> UnGraph<usize, f64> {
        let mut graph = UnGraph::with_capacity(self.len(), self.edge_count);
        let nodes: Vec<_> = (0..self.len()).map(|i| graph.add_node(i)).collect();
        for (i, row) in self.adjacency.iter().enumerate() {
            for &(j, w) in row.iter().filter(|e| e.0 > i) {
                graph.add_edge(nodes[i], nodes[j], w);
            }
        }
        graph
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        connected_components(&self.to_petgraph())
    }

    /// Whether every pair of points is joined by a positive-weight path.
    pub fn is_connected(&self) -> bool {
        self.len() <= 1 || self.component_count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric_and_deduplicated() {
        let g = WeightGraph::from_edges(3, &[(0, 1, 0.5), (1, 0, 0.7), (1, 2, 0.2)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(0, 1), 0.7);
        assert_eq!(g.weight(1, 0), 0.7);
        assert_eq!(g.weight(0, 2), 0.0);
        assert_eq!(g.max_weights(), &[0.7, 0.7, 0.2]);
    }

    #[test]
    fn rejects_self_loops_and_non_positive_weights() {
        assert!(WeightGraph::from_edges(2, &[(0, 0, 1.0)]).is_err());
        assert!(WeightGraph::from_edges(2, &[(0, 1, 0.0)]).is_err());
        assert!(WeightGraph::from_edges(2, &[(0, 5, 1.0)]).is_err());
    }

    #[test]
    fn dense_matrix_must_be_symmetric() {
        let err = WeightGraph::from_dense(&[vec![0.0, 1.0], vec![0.5, 0.0]]).unwrap_err();
        assert!(matches!(err, GraphError::Asymmetric { .. }));
    }

    #[test]
    fn connectivity_via_petgraph() {
        let split = WeightGraph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        assert_eq!(split.component_count(), 2);
        assert!(!split.is_connected());

        let joined = WeightGraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
        assert!(joined.is_connected());
    }
}
