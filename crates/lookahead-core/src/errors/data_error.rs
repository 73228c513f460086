/// Dataset construction errors.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("dataset has no points")]
    Empty,

    #[error("row {row} has {actual} features, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("non-finite feature at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },

    #[error("point {index} is already observed")]
    AlreadyObserved { index: usize },
}
