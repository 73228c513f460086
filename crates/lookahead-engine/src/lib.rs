//! # lookahead-engine
//!
//! The sequential controller that runs a query budget against an oracle,
//! the depth → strategy table, a config-driven experiment harness, and
//! tracing setup.

pub mod engine;
pub mod experiment;
pub mod strategy_table;
pub mod tracing_setup;

pub use engine::{validate_budget, ActiveSearch};
pub use experiment::{Experiment, ExperimentReport};
pub use strategy_table::{effective_lookahead, strategy_for_depth};
