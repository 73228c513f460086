//! Capability interfaces injected into the controller.

mod probability_model;
mod selector;
mod utility;

pub use probability_model::IProbabilityModel;
pub use selector::ISelector;
pub use utility::{IExpectedUtility, IUtility};
