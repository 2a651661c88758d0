//! Diagnostic logging for the CLI

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install a stderr subscriber filtered by `level` (any `EnvFilter` directive).
///
/// An unparseable directive falls back to `warn`. Stdout stays reserved for
/// user-facing messages.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
