//! Logging setup.
//!
//! Logs go to stderr so they never interleave with the rendered frames on
//! stdout. `RUST_LOG` wins over the configured level.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Builds the log filter.
#[must_use]
pub fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(configured: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
