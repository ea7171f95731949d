//! Change collector — turns host events into stored notifications.

use pkgwatch_core::events::{PackageEvent, PackageRef};
use pkgwatch_core::types::UniqueList;

use crate::hooks::HookStatus;
use crate::notifications::NotificationStore;

/// Collects package changes from the host's event stream.
///
/// Consumes one event at a time during an operation batch. Events that
/// finished a package change are filtered against the watch list and
/// recorded in the notification store; everything else is ignored. The
/// collector never fails: absence of a match is not an error, and the
/// per-event callback always reports success to the host.
#[derive(Debug, Clone)]
pub struct ChangeCollector {
    /// Names and origins to watch. Empty = watch every package.
    watch_list: UniqueList,
}

impl ChangeCollector {
    /// Creates a collector for the given watch list.
    pub fn new(watch_list: UniqueList) -> Self {
        Self { watch_list }
    }

    /// Consumes one host event, recording a notification when it
    /// describes a watched package change.
    pub fn collect(&self, event: &PackageEvent, store: &mut NotificationStore) -> HookStatus {
        if let Some(pkg) = changed_package(event) {
            if self.watches(pkg) {
                tracing::debug!(name = %pkg.name, origin = %pkg.origin, "Collected package change");
                store.insert(&pkg.name, &pkg.origin);
            }
        }

        HookStatus::Ok
    }

    fn watches(&self, pkg: &PackageRef) -> bool {
        self.watch_list.is_empty()
            || self.watch_list.contains(&pkg.name)
            || self.watch_list.contains(&pkg.origin)
    }
}

/// Returns the package a finished-change event refers to.
///
/// Upgrades report the post-upgrade identity, so the new package is the
/// one recorded. Begin events and message events carry no change.
fn changed_package(event: &PackageEvent) -> Option<&PackageRef> {
    match event {
        PackageEvent::InstallFinished { pkg } => Some(pkg),
        PackageEvent::DeinstallFinished { pkg } => Some(pkg),
        PackageEvent::UpgradeFinished { new, .. } => Some(new),
        _ => None,
    }
}
