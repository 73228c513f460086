//! Point-selection strategies.
//!
//! Both strategies consider exactly the unobserved points, in ascending index
//! order, and resolve ties to the lowest index.

mod argmax;
mod lookahead;

pub use argmax::ArgmaxSelector;
pub use lookahead::LookaheadSelector;

use lookahead_core::errors::{SearchResult, SelectionError};
use lookahead_core::{Dataset, Observations, Selection};

/// Unobserved candidates, failing with `NoCandidates` if there are none.
fn candidates(data: &Dataset, obs: &Observations) -> Result<Vec<usize>, SelectionError> {
    let pool: Vec<usize> = obs.unobserved(data.len()).collect();
    if pool.is_empty() {
        return Err(SelectionError::NoCandidates);
    }
    Ok(pool)
}

fn checked(index: usize, value: f64) -> SearchResult<Selection> {
    if !value.is_finite() {
        return Err(SelectionError::NonFiniteUtility { index, value }.into());
    }
    Ok(Selection::new(index, value))
}
