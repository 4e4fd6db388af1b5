//! tracing subscriber setup.
//!
//! Diagnostics go to stderr without ANSI colours; stdout is reserved for
//! command output.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured `log_level`.
pub const LOG_ENV: &str = "PUNCHCLOCK_LOG";

pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    // a second init (e.g. library used from a test binary) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
