//! Notification dispatcher — runs every script against every collected
//! change once a batch completes.
//!
//! The outer loop is over scripts, in configuration order: every script
//! sees every change before the next script runs. Failures are
//! accumulated, never short-circuited — a failing invocation must not
//! prevent the remaining notifications or scripts from being attempted.

use std::sync::Arc;

use pkgwatch_core::types::UniqueList;

use crate::hooks::HookStatus;
use crate::notifications::NotificationStore;
use crate::runner::ScriptRunner;

/// Dispatches collected notifications to the configured scripts.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Script paths in configuration order.
    scripts: UniqueList,
    /// Runner used for each invocation.
    runner: Arc<dyn ScriptRunner>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given scripts and runner.
    pub fn new(scripts: UniqueList, runner: Arc<dyn ScriptRunner>) -> Self {
        Self { scripts, runner }
    }

    /// Runs every configured script once per collected notification and
    /// drains the store.
    ///
    /// Returns [`HookStatus::Fatal`] if any invocation failed, otherwise
    /// [`HookStatus::Ok`]. The store is cleared before returning
    /// regardless of the outcome, so the next batch starts empty.
    pub fn dispatch(&self, store: &mut NotificationStore) -> HookStatus {
        let mut status = HookStatus::Ok;

        for script in self.scripts.iter() {
            for notification in store.iter() {
                if let Err(err) =
                    self.runner
                        .run(script, &notification.name, &notification.origin)
                {
                    // Keep going: process as many change notifications as possible.
                    tracing::error!(script = %script, "{err}");
                    status = HookStatus::Fatal;
                }
            }
        }

        store.clear();
        status
    }
}
