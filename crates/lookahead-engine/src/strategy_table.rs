//! Depth-indexed strategy lookup.

/// Strategy serving `depth`: entry `depth - 1`, or the last entry when the
/// table is shorter. `None` only for an empty table.
pub fn strategy_for_depth<T>(strategies: &[T], depth: usize) -> Option<&T> {
    let slot = depth.clamp(1, strategies.len().max(1)) - 1;
    strategies.get(slot)
}

/// Lookahead used at 1-based `step` of a `num_evaluations` budget: never more
/// than the queries left, this one included.
pub fn effective_lookahead(lookahead: usize, num_evaluations: usize, step: usize) -> usize {
    let remaining = (num_evaluations + 1).saturating_sub(step);
    lookahead.min(remaining)
}
