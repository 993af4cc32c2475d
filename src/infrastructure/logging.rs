//! Structured logging with tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive to use: `--verbose` forces debug, otherwise the configured level.
/// RUST_LOG still takes precedence inside [`init_logging`].
pub fn effective_level(configured: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}

/// Install the global subscriber. Output goes to stderr so stdout stays clean.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (tests calling run twice) is harmless; ignore it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
