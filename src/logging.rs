//! Structured logging setup using `tracing-subscriber`.
//!
//! Console-only: the engine is a library plus a one-shot CLI, so there
//! is no file rotation mode.

use tracing_subscriber::EnvFilter;

/// Initialise console logging for the CLI.
///
/// Emits human-readable output to stderr. Controlled by `RUST_LOG`
/// when set, otherwise `default_level` (typically the configured
/// `log_level`).
pub fn init_cli(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
