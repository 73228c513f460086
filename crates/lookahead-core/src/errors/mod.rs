//! Error handling for lookahead.
//! One error enum per subsystem, folded into [`SearchError`] via `#[from]`.

mod config_error;
mod data_error;
mod graph_error;
mod model_error;
mod selection_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use graph_error::GraphError;
pub use model_error::ModelError;
pub use selection_error::SelectionError;

/// Top-level error for every fallible lookahead operation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("data error: {0}")]
    DataError(#[from] DataError),

    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("model error: {0}")]
    ModelError(#[from] ModelError),

    #[error("selection error: {0}")]
    SelectionError(#[from] SelectionError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type SearchResult<T> = Result<T, SearchError>;
