// Single source of truth for all default values.

// --- Graph ---
pub const DEFAULT_NEIGHBOURS: usize = 10;
pub const DEFAULT_BANDWIDTH: f64 = 1.0;
pub const DEFAULT_MIN_WEIGHT: f64 = 1e-12;
pub const DEFAULT_MUTUAL: bool = true;

// --- Model ---
pub const DEFAULT_PSEUDOCOUNT: f64 = 0.1;
pub const DEFAULT_PRIOR: f64 = 0.05;

// --- Search ---
pub const DEFAULT_NUM_EVALUATIONS: usize = 100;
pub const DEFAULT_LOOKAHEAD: usize = 2;
pub const DEFAULT_VERBOSE: bool = false;
pub const DEFAULT_PRUNING: bool = true;
pub const DEFAULT_PARALLEL: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
