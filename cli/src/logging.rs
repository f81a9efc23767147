//! Tracing setup. Logs go to stderr so stdout carries only the report.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, filtered by `RUST_LOG` (default `warn`).
///
/// A subscriber that is already installed is left in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
