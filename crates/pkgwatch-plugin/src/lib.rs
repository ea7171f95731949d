//! # pkgwatch-plugin
//!
//! The pkgwatch plugin core. Provides:
//!
//! - Hook points and {Ok, Fatal} status codes of the host interface
//! - Per-batch notification store
//! - Change collector with watch-list filtering
//! - Script dispatcher with best-effort partial-failure semantics
//! - Blocking external script runner
//! - The `WatchPlugin` session object tying it all together

pub mod collector;
pub mod dispatcher;
pub mod hooks;
pub mod notifications;
pub mod plugin;
pub mod runner;

pub use collector::ChangeCollector;
pub use dispatcher::Dispatcher;
pub use hooks::{HookPoint, HookStatus};
pub use notifications::{Notification, NotificationStore};
pub use plugin::{PluginInfo, WatchPlugin};
pub use runner::{ProcessRunner, RunnerError, ScriptRunner};
