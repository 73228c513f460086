//! Subscriber installation and span helpers.

pub mod spans;

use lookahead_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level. Returns `false` if a subscriber was already installed.
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
