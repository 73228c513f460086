/// Probability model errors. These indicate programming errors in a model
/// and are surfaced, never corrected.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("probability {value} is outside [0, 1]")]
    ProbabilityOutOfRange { value: f64 },

    #[error("bound {bound:.6} for point {index} is below its probability {probability:.6}")]
    BoundBelowProbability {
        index: usize,
        probability: f64,
        bound: f64,
    },

    #[error("point {index} out of range for a model over {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid model parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}
