//! # pkgwatch
//!
//! A package-manager plugin that watches for package install, removal,
//! upgrade, and autoremoval events and, after the changes complete, runs
//! a configured set of scripts once per changed package, passing the
//! package's name and origin as arguments:
//!
//! ```text
//! script <package-name> <package-origin>
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pkgwatch::{HookPoint, PluginConfig, WatchPlugin};
//!
//! let config = PluginConfig::load("/usr/local/etc/pkg/pkgwatch")?;
//! let mut plugin = WatchPlugin::from_config(&config);
//!
//! // The host delivers events while an operation batch runs...
//! for event in host_events {
//!     plugin.handle_event(&event);
//! }
//! // ...and fires the post-operation hook once the batch completes.
//! let status = plugin.handle_post_operation(HookPoint::PostInstall);
//! ```
//!
//! Scripts run sequentially with a blocking wait: every script sees every
//! change before the next script runs, a failing invocation never stops
//! the remaining ones, and the batch reports `Fatal` iff any invocation
//! failed.

pub mod logging;

pub use pkgwatch_core::config::logging::LoggingConfig;
pub use pkgwatch_core::config::PluginConfig;
pub use pkgwatch_core::error::ErrorKind;
pub use pkgwatch_core::events::{PackageEvent, PackageRef};
pub use pkgwatch_core::types::UniqueList;
pub use pkgwatch_core::{AppError, AppResult};
pub use pkgwatch_plugin::{
    HookPoint, HookStatus, Notification, NotificationStore, PluginInfo, ProcessRunner,
    RunnerError, ScriptRunner, WatchPlugin,
};
