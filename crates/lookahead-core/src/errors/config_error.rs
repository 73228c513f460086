/// Configuration errors. All of these are detected before a run starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no selection strategies configured")]
    EmptyStrategies,

    #[error("lookahead must be at least 1, got {lookahead}")]
    InvalidLookahead { lookahead: usize },

    #[error("index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("training index {index} appears more than once")]
    DuplicateTrainingIndex { index: usize },

    #[error("length mismatch: {what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("query budget {budget} exceeds the {available} unlabeled points available")]
    BudgetExceedsPool { budget: usize, available: usize },

    #[error("unknown selection strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("failed to read config {path}: {message}")]
    FileNotFound { path: String, message: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },
}
