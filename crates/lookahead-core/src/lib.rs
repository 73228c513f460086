//! # lookahead-core
//!
//! Foundation crate for the lookahead active search system.
//! Defines the data model, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LookaheadConfig;
pub use data::{Dataset, Observations, Probability, Responses};
pub use errors::{SearchError, SearchResult};
pub use models::{SearchOutcome, Selection, StepRecord};
pub use traits::{IExpectedUtility, IProbabilityModel, ISelector, IUtility};
