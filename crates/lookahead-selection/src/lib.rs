//! # lookahead-selection
//!
//! Utilities for active search (how many positives a training set holds, and
//! how many one more query is expected to add) and the point-selection
//! strategies that maximise them: one-step argmax and l-step lookahead with
//! optional branch-and-bound pruning.

pub mod selectors;
pub mod utility;

pub use selectors::{ArgmaxSelector, LookaheadSelector};
pub use utility::{CountUtility, ExpectedCountUtility};
