/// Point selection errors.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// No unlabeled candidate remains. `completed` holds the indices chosen
    /// by the steps that finished before the failure.
    #[error("candidate pool exhausted at step {step} after {} completed queries", .completed.len())]
    Exhausted { step: usize, completed: Vec<usize> },

    #[error("no unlabeled candidates to select from")]
    NoCandidates,

    #[error("strategy {strategy} returned already-observed point {index}")]
    AlreadyObserved { strategy: String, index: usize },

    #[error("strategy {strategy} returned point {index} outside the pool of {len}")]
    OutOfPool {
        strategy: String,
        index: usize,
        len: usize,
    },

    #[error("non-finite expected utility {value} for candidate {index}")]
    NonFiniteUtility { index: usize, value: f64 },
}
