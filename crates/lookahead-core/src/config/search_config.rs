use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Selection strategies that can be named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// One-step greedy maximisation of expected utility.
    Argmax,
    /// Multi-step expected utility search.
    Lookahead,
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "argmax" => Ok(Self::Argmax),
            "lookahead" => Ok(Self::Lookahead),
            other => Err(ConfigError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argmax => f.write_str("argmax"),
            Self::Lookahead => f.write_str("lookahead"),
        }
    }
}

/// Controller and selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Query budget.
    pub num_evaluations: usize,
    /// Requested lookahead depth.
    pub lookahead: usize,
    /// Emit one diagnostic line per step.
    pub verbose: bool,
    /// Branch-and-bound pruning in the lookahead strategy.
    pub pruning: bool,
    /// Evaluate top-level candidates on the rayon pool.
    pub parallel: bool,
    /// Strategy per depth: entry 0 serves depth 1, the last entry serves
    /// every depth beyond the list.
    pub strategies: Vec<StrategyKind>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_evaluations: defaults::DEFAULT_NUM_EVALUATIONS,
            lookahead: defaults::DEFAULT_LOOKAHEAD,
            verbose: defaults::DEFAULT_VERBOSE,
            pruning: defaults::DEFAULT_PRUNING,
            parallel: defaults::DEFAULT_PARALLEL,
            strategies: vec![StrategyKind::Argmax, StrategyKind::Lookahead],
        }
    }
}
