//! # lookahead-graph
//!
//! Builds the static weight graph consumed by the probability model:
//! k-NN search → mutual filtering → MST augmentation → distance weighting.
//! The MST guarantees every pair of points is joined by a path of
//! positive-weight edges.

pub mod builder;
pub mod knn;
pub mod mst;
pub mod weight_graph;
pub mod weights;

pub use builder::GraphBuilder;
pub use weight_graph::WeightGraph;
pub use weights::WeightFunction;
