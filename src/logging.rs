//! Tracing subscriber setup for processes embedding the plugin.

use tracing_subscriber::{EnvFilter, fmt};

use pkgwatch_core::config::logging::LoggingConfig;
use pkgwatch_core::error::AppError;

/// Initialize tracing/logging from plugin configuration.
///
/// The `RUST_LOG` environment variable overrides the configured level.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    result.map_err(|e| AppError::plugin(format!("Failed to initialize logging: {e}")))
}
