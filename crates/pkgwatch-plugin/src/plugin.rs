//! The watch plugin session — one instance per host plugin session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pkgwatch_core::config::PluginConfig;
use pkgwatch_core::events::PackageEvent;

use crate::collector::ChangeCollector;
use crate::dispatcher::Dispatcher;
use crate::hooks::{HookPoint, HookStatus};
use crate::notifications::NotificationStore;
use crate::runner::{ProcessRunner, ScriptRunner};

/// Metadata the plugin registers with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
}

/// The plugin session object.
///
/// Owns the configured script list, the watch list, and the notification
/// store for the current batch. The host drives it through two entry
/// points: [`WatchPlugin::handle_event`] once per event while a batch is
/// in progress, and [`WatchPlugin::handle_post_operation`] once after the
/// batch completes. Both are called from the host's single control
/// thread; the plugin performs no internal threading.
#[derive(Debug)]
pub struct WatchPlugin {
    /// Plugin metadata.
    info: PluginInfo,
    /// Collector applying the watch-list filter.
    collector: ChangeCollector,
    /// Dispatcher over the configured scripts.
    dispatcher: Dispatcher,
    /// Notifications for the batch currently in progress.
    store: NotificationStore,
    /// Whether any scripts are configured. An inactive plugin stays
    /// loaded but registers no hooks and performs no work.
    active: bool,
}

impl WatchPlugin {
    /// Builds a plugin session from loaded configuration, running scripts
    /// through the blocking process runner.
    pub fn from_config(config: &PluginConfig) -> Self {
        Self::with_runner(config, Arc::new(ProcessRunner::new()))
    }

    /// Builds a plugin session with a caller-supplied script runner.
    pub fn with_runner(config: &PluginConfig, runner: Arc<dyn ScriptRunner>) -> Self {
        let scripts = config.watch.script_list();
        let watch_list = config.watch.watch_list();

        let active = !scripts.is_empty();
        if !active {
            tracing::warn!("No scripts configured. Nothing to do.");
        } else {
            tracing::info!(
                scripts = scripts.len(),
                watched = watch_list.len(),
                "Watch plugin configured"
            );
        }

        Self {
            info: PluginInfo {
                name: "pkgwatch".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "Watch for package changes".to_string(),
                author: "pkgwatch maintainers".to_string(),
            },
            collector: ChangeCollector::new(watch_list),
            dispatcher: Dispatcher::new(scripts, runner),
            store: NotificationStore::new(),
            active,
        }
    }

    /// Returns plugin metadata.
    pub fn info(&self) -> &PluginInfo {
        &self.info
    }

    /// Returns whether the plugin has any scripts to run.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the hook points this plugin wants to register for.
    ///
    /// Empty when no scripts are configured: an inert plugin does not
    /// hook into the host at all.
    pub fn registered_hooks(&self) -> Vec<HookPoint> {
        if !self.active {
            return Vec::new();
        }
        vec![
            HookPoint::Event,
            HookPoint::PostInstall,
            HookPoint::PostDeinstall,
            HookPoint::PostUpgrade,
            HookPoint::PostAutoremove,
        ]
    }

    /// Event-hook callback: collects the package change, if any.
    ///
    /// Always returns [`HookStatus::Ok`]; an event that produces no
    /// notification is not an error.
    pub fn handle_event(&mut self, event: &PackageEvent) -> HookStatus {
        if !self.active {
            return HookStatus::Ok;
        }
        self.collector.collect(event, &mut self.store)
    }

    /// Post-operation callback: dispatches all collected notifications.
    ///
    /// Returns [`HookStatus::Fatal`] iff any script invocation failed.
    /// The notification store is drained whatever the outcome.
    pub fn handle_post_operation(&mut self, hook: HookPoint) -> HookStatus {
        if !self.active || !hook.is_post_operation() {
            return HookStatus::Ok;
        }

        tracing::debug!(hook = %hook, pending = self.store.len(), "Dispatching batch");
        self.dispatcher.dispatch(&mut self.store)
    }

    /// Returns the number of notifications collected for the current batch.
    pub fn pending_notifications(&self) -> usize {
        self.store.len()
    }

    /// Releases all per-session state.
    pub fn shutdown(&mut self) {
        self.store.clear();
        tracing::info!("Watch plugin shut down");
    }
}
