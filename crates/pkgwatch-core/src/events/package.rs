//! Package lifecycle events.

use serde::{Deserialize, Serialize};

/// Identity of a package as known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// The package's short name, e.g. `curl`.
    pub name: String,
    /// The package's canonical source/category identifier, e.g. `ftp/curl`.
    pub origin: String,
}

impl PackageRef {
    /// Creates a new package reference.
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
        }
    }
}

/// Events emitted by the host while it processes a package operation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PackageEvent {
    /// An installation is about to start.
    InstallBegin {
        /// The package being installed.
        pkg: PackageRef,
    },
    /// An installation completed.
    InstallFinished {
        /// The package that was installed.
        pkg: PackageRef,
    },
    /// A removal is about to start.
    DeinstallBegin {
        /// The package being removed.
        pkg: PackageRef,
    },
    /// A removal completed.
    DeinstallFinished {
        /// The package that was removed.
        pkg: PackageRef,
    },
    /// An upgrade is about to start.
    UpgradeBegin {
        /// The installed package being replaced.
        old: PackageRef,
        /// The package it will be replaced with.
        new: PackageRef,
    },
    /// An upgrade completed.
    UpgradeFinished {
        /// The package that was replaced.
        old: PackageRef,
        /// The package now installed.
        new: PackageRef,
    },
    /// The host reported an error message.
    Error {
        /// The error text.
        message: String,
    },
    /// The host reported an informational notice.
    Notice {
        /// The notice text.
        message: String,
    },
}
