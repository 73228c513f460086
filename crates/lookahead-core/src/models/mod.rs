//! Result models shared between the selection strategies and the controller.

mod search_outcome;
mod selection;
mod step_record;

pub use search_outcome::SearchOutcome;
pub use selection::Selection;
pub use step_record::StepRecord;
