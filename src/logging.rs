//! Logging initialization for the binaries.
//!
//! Diagnostics go to stderr so stdout stays reserved for protocol output.
//! The level comes from `RUST_LOG`, defaulting to `warn`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}
