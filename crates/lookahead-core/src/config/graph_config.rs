use serde::{Deserialize, Serialize};

use super::defaults;

/// Distance-to-weight mapping applied to every kept edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightKind {
    /// `exp(-d² / (2σ²))`.
    Gaussian { bandwidth: f64 },
    /// `1 / (1 + d)`.
    InverseDistance,
}

impl Default for WeightKind {
    fn default() -> Self {
        Self::Gaussian {
            bandwidth: defaults::DEFAULT_BANDWIDTH,
        }
    }
}

/// Weight graph construction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Neighbours per point in the k-NN search.
    pub k: usize,
    /// Keep only mutual k-NN edges (otherwise the symmetric union).
    pub mutual: bool,
    /// Floor applied to every edge weight so MST edges stay positive.
    pub min_weight: f64,
    pub weight: WeightKind,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            k: defaults::DEFAULT_NEIGHBOURS,
            mutual: defaults::DEFAULT_MUTUAL,
            min_weight: defaults::DEFAULT_MIN_WEIGHT,
            weight: WeightKind::default(),
        }
    }
}
