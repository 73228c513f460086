/// Lookahead system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A candidate is pruned only when its bound is below the incumbent by more than this.
pub const PRUNING_TOLERANCE: f64 = 1e-9;

/// Slack allowed when checking that a probability bound dominates the
/// probability it bounds.
pub const BOUND_TOLERANCE: f64 = 1e-12;

/// Maximum lookahead depth accepted from configuration.
pub const MAX_LOOKAHEAD: usize = 8;
