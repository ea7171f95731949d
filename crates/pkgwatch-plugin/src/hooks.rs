//! Hook points and status codes of the host plugin interface.

use serde::{Deserialize, Serialize};

/// Hook points the plugin registers against.
///
/// `Event` delivers the host's event stream while an operation batch is
/// in progress; the four post-operation hooks fire once after a batch
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Fired for every event the host emits during a batch.
    Event,
    /// Fired after an install operation completes.
    PostInstall,
    /// Fired after a deinstall operation completes.
    PostDeinstall,
    /// Fired after an upgrade operation completes.
    PostUpgrade,
    /// Fired after an autoremove operation completes.
    PostAutoremove,
}

impl HookPoint {
    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::PostInstall => "post_install",
            Self::PostDeinstall => "post_deinstall",
            Self::PostUpgrade => "post_upgrade",
            Self::PostAutoremove => "post_autoremove",
        }
    }

    /// Returns whether this hook fires after a completed operation batch.
    pub fn is_post_operation(&self) -> bool {
        matches!(
            self,
            Self::PostInstall | Self::PostDeinstall | Self::PostUpgrade | Self::PostAutoremove
        )
    }
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status code returned to the host from a hook callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStatus {
    /// The callback completed successfully.
    Ok,
    /// The callback failed; the host reports the operation as failed.
    Fatal,
}

impl HookStatus {
    /// Returns whether this status reports failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}
