//! Shared test helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pkgwatch::PluginConfig;

/// On-disk fixture directory holding scripts, logs, and config files.
pub struct TestDir {
    /// The temporary directory; removed on drop.
    pub dir: TempDir,
}

impl TestDir {
    /// Creates a new fixture directory.
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Returns the path of a file inside the fixture directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }

    /// Writes a TOML config file and loads it.
    pub fn load_config(&self, contents: &str) -> Result<PluginConfig, pkgwatch::AppError> {
        let path = self.path("pkgwatch.toml");
        fs::write(&path, contents).expect("Failed to write config file");
        PluginConfig::load(path.to_str().expect("non-UTF-8 temp path"))
    }

    /// Creates an executable shell script that appends `"$1 $2"` to
    /// `log`, then exits with `exit_code`.
    #[cfg(unix)]
    pub fn script(&self, name: &str, log: &Path, exit_code: i32) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(name);
        let body = format!(
            "#!/bin/sh\necho \"$1 $2\" >> {}\nexit {}\n",
            log.display(),
            exit_code
        );
        fs::write(&path, body).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path.to_str().expect("non-UTF-8 temp path").to_string()
    }

    /// Reads the invocation log written by [`TestDir::script`], one line
    /// per invocation.
    pub fn read_log(&self, log: &Path) -> Vec<String> {
        match fs::read_to_string(log) {
            Ok(contents) => contents.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Installs a tracing subscriber once for the whole test binary.
fn init_tracing() {
    use pkgwatch::LoggingConfig;

    // Later calls fail because a subscriber is already set; that is fine.
    let _ = pkgwatch::logging::init_logging(&LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    });
}
