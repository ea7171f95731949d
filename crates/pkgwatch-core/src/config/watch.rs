//! Watch configuration: scripts to run and packages to watch.

use serde::{Deserialize, Serialize};

use crate::types::UniqueList;

/// Script and watch-list configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Paths of executables to invoke for each package change. Without
    /// scripts the plugin loads but performs no hooking.
    #[serde(default)]
    pub scripts: Vec<String>,
    /// Package names or origins to watch. An empty list watches every
    /// package.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl WatchConfig {
    /// Returns the configured scripts as a deduplicated list in
    /// configuration order.
    ///
    /// Empty strings are dropped: the host's configuration format parses
    /// `""` as an absent value, and that quirk is preserved here.
    pub fn script_list(&self) -> UniqueList {
        sanitize(&self.scripts)
    }

    /// Returns the configured watch entries as a deduplicated list.
    ///
    /// Empty strings are dropped, as for [`WatchConfig::script_list`].
    pub fn watch_list(&self) -> UniqueList {
        sanitize(&self.packages)
    }
}

fn sanitize(values: &[String]) -> UniqueList {
    values
        .iter()
        .filter(|value| !value.is_empty())
        .cloned()
        .collect()
}
