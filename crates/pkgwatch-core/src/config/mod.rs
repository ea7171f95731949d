//! Plugin configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod watch;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::watch::WatchConfig;

use crate::error::AppError;

/// Root plugin configuration.
///
/// This struct is the top-level deserialization target for the plugin's
/// TOML configuration file plus environment-variable overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Script and watch-list settings.
    #[serde(default)]
    pub watch: WatchConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PluginConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the named file (missing file = all defaults) with environment
    /// variables prefixed with `PKGWATCH`. A structurally invalid
    /// configuration returns a `Configuration` error without emitting any
    /// diagnostics; the host runs the plugin from unattended periodic jobs
    /// and callers choose whether anything is printed.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PKGWATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
