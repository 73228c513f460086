//! Configuration for lookahead.
//! TOML-based; resolution order: environment (`LOOKAHEAD_*`) > file > defaults.

pub mod defaults;
mod graph_config;
mod model_config;
mod observability_config;
mod search_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use graph_config::{GraphConfig, WeightKind};
pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use search_config::{SearchConfig, StrategyKind};

use crate::constants::MAX_LOOKAHEAD;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookaheadConfig {
    pub graph: GraphConfig,
    pub model: ModelConfig,
    pub search: SearchConfig,
    pub observability: ObservabilityConfig,
}

impl LookaheadConfig {
    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a TOML file, apply `LOOKAHEAD_*` environment overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_overrides(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LOOKAHEAD_*` overrides from key/value pairs. Unrelated keys are ignored.
    pub fn apply_overrides<I>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                "LOOKAHEAD_NUM_EVALUATIONS" => {
                    self.search.num_evaluations = parse_field("search.num_evaluations", &value)?;
                }
                "LOOKAHEAD_DEPTH" => {
                    self.search.lookahead = parse_field("search.lookahead", &value)?;
                }
                "LOOKAHEAD_VERBOSE" => {
                    self.search.verbose = parse_field("search.verbose", &value)?;
                }
                "LOOKAHEAD_PRUNING" => {
                    self.search.pruning = parse_field("search.pruning", &value)?;
                }
                "LOOKAHEAD_PARALLEL" => {
                    self.search.parallel = parse_field("search.parallel", &value)?;
                }
                "LOOKAHEAD_STRATEGIES" => {
                    self.search.strategies = value
                        .split(',')
                        .filter(|s| !s.trim().is_empty())
                        .map(str::parse)
                        .collect::<Result<_, _>>()?;
                }
                "LOOKAHEAD_LOG_LEVEL" => {
                    self.observability.log_level = value;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.graph.k == 0 {
            return Err(invalid("graph.k", "must be greater than 0"));
        }
        if !(self.graph.min_weight > 0.0 && self.graph.min_weight.is_finite()) {
            return Err(invalid("graph.min_weight", "must be positive and finite"));
        }
        if let WeightKind::Gaussian { bandwidth } = self.graph.weight {
            if !(bandwidth > 0.0 && bandwidth.is_finite()) {
                return Err(invalid("graph.weight.bandwidth", "must be positive and finite"));
            }
        }
        if !(self.model.pseudocount > 0.0 && self.model.pseudocount.is_finite()) {
            return Err(invalid("model.pseudocount", "must be positive and finite"));
        }
        if !(self.model.prior > 0.0 && self.model.prior < 1.0) {
            return Err(invalid("model.prior", "must be strictly between 0.0 and 1.0"));
        }
        if self.search.lookahead == 0 {
            return Err(ConfigError::InvalidLookahead { lookahead: 0 });
        }
        if self.search.lookahead > MAX_LOOKAHEAD {
            return Err(invalid(
                "search.lookahead",
                &format!("must be at most {MAX_LOOKAHEAD}"),
            ));
        }
        if self.search.strategies.is_empty() {
            return Err(ConfigError::EmptyStrategies);
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: field.to_string(),
        message: format!("cannot parse {value:?}"),
    })
}
