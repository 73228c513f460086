//! Data model: the immutable pool, the oracle labels, and the observed training set.

mod dataset;
mod observations;
mod probability;
mod responses;

pub use dataset::Dataset;
pub use observations::Observations;
pub use probability::Probability;
pub use responses::Responses;
