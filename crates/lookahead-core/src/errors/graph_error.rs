/// Weight graph construction errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid neighbour count: k = {k} with {points} points")]
    InvalidNeighbourCount { k: usize, points: usize },

    #[error("graph is disconnected: {components} components")]
    Disconnected { components: usize },

    #[error("invalid edge weight {weight} between {source_index} and {target_index}")]
    InvalidWeight {
        source_index: usize,
        target_index: usize,
        weight: f64,
    },

    #[error("edge {source_index} -> {target_index} has no symmetric counterpart")]
    Asymmetric {
        source_index: usize,
        target_index: usize,
    },

    #[error("invalid weight function parameter: {reason}")]
    InvalidParameter { reason: String },
}
