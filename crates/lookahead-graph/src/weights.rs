//! Distance → edge weight mappings.

use lookahead_core::config::WeightKind;
use lookahead_core::errors::GraphError;

/// Validated weight function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightFunction {
    /// `exp(-d² / (2σ²))`.
    Gaussian { bandwidth: f64 },
    /// `1 / (1 + d)`.
    InverseDistance,
}

impl WeightFunction {
    pub fn gaussian(bandwidth: f64) -> Result<Self, GraphError> {
        if bandwidth > 0.0 && bandwidth.is_finite() {
            Ok(Self::Gaussian { bandwidth })
        } else {
            Err(GraphError::InvalidParameter {
                reason: format!("gaussian bandwidth must be positive and finite, got {bandwidth}"),
            })
        }
    }

    pub fn from_config(kind: WeightKind) -> Result<Self, GraphError> {
        match kind {
            WeightKind::Gaussian { bandwidth } => Self::gaussian(bandwidth),
            WeightKind::InverseDistance => Ok(Self::InverseDistance),
        }
    }

    /// Weight for an edge of length `distance`. Non-increasing in distance,
    /// 1.0 at distance 0.
    pub fn apply(&self, distance: f64) -> f64 {
        match *self {
            Self::Gaussian { bandwidth } => {
                (-(distance * distance) / (2.0 * bandwidth * bandwidth)).exp()
            }
            Self::InverseDistance => 1.0 / (1.0 + distance),
        }
    }
}

impl Default for WeightFunction {
    fn default() -> Self {
        Self::Gaussian { bandwidth: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_is_one_at_zero_and_decays() {
        let f = WeightFunction::gaussian(2.0).unwrap();
        assert_eq!(f.apply(0.0), 1.0);
        assert!((f.apply(2.0) - (-0.5f64).exp()).abs() < 1e-12);
        assert!(f.apply(3.0) < f.apply(2.0));
    }

    #[test]
    fn inverse_distance_values() {
        let f = WeightFunction::InverseDistance;
        assert_eq!(f.apply(0.0), 1.0);
        assert_eq!(f.apply(1.0), 0.5);
    }

    #[test]
    fn rejects_bad_bandwidth() {
        assert!(WeightFunction::gaussian(0.0).is_err());
        assert!(WeightFunction::gaussian(f64::INFINITY).is_err());
        assert!(WeightFunction::from_config(WeightKind::Gaussian { bandwidth: -1.0 }).is_err());
    }
}
