//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// Initialize logging based on debug flag
///
/// Logs go to stderr so stdout carries only rendered output.
pub fn init_logging(debug: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(debug)
        .try_init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
