//! # lookahead-model
//!
//! Probability models implementing [`lookahead_core::IProbabilityModel`]:
//! weighted neighbour voting over the graph, a constant model, and a wrapper
//! that checks any model's numeric contract.

pub mod fixed;
pub mod knn;
pub mod validated;

pub use fixed::FixedProbabilityModel;
pub use knn::KnnModel;
pub use validated::ValidatedModel;
