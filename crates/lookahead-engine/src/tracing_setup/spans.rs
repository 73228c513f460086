//! Span definitions per operation: search run, controller step, selection.
//!
//! Graph construction opens its own `lookahead.graph` span in the builder.

/// Create a span covering a whole controller run.
#[macro_export]
macro_rules! search_span {
    ($num_evaluations:expr, $lookahead:expr) => {
        tracing::info_span!("lookahead.search", num_evaluations = $num_evaluations, lookahead = $lookahead)
    };
}

/// Create a span for one controller step.
#[macro_export]
macro_rules! step_span {
    ($step:expr, $depth:expr) => {
        tracing::info_span!("lookahead.step", step = $step, depth = $depth)
    };
}

/// Create a span for one strategy invocation.
#[macro_export]
macro_rules! selection_span {
    ($strategy:expr, $depth:expr) => {
        tracing::debug_span!("lookahead.selection", strategy = %$strategy, depth = $depth)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "lookahead.search";
    pub const STEP: &str = "lookahead.step";
    pub const SELECTION: &str = "lookahead.selection";
    pub const GRAPH: &str = "lookahead.graph";
}
