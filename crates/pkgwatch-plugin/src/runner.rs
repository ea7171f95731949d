//! External script execution.

use std::process::Command;

use thiserror::Error;

/// Errors from a single script invocation.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The script process could not be spawned.
    #[error("Failed to spawn \"{script}\" for: \"{name}\", \"{origin}\": {source}")]
    Spawn {
        /// The script path.
        script: String,
        /// The package name argument.
        name: String,
        /// The package origin argument.
        origin: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the script process failed.
    #[error("Failed waiting for \"{script}\": {source}")]
    Wait {
        /// The script path.
        script: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The script exited with a non-zero status.
    #[error("\"{script}\" returned with error for: \"{name}\", \"{origin}\"")]
    ExitStatus {
        /// The script path.
        script: String,
        /// The package name argument.
        name: String,
        /// The package origin argument.
        origin: String,
        /// The exit code, or -1 if the process was terminated by a signal.
        code: i32,
    },
}

impl From<RunnerError> for pkgwatch_core::AppError {
    fn from(err: RunnerError) -> Self {
        let message = err.to_string();
        Self::with_source(pkgwatch_core::error::ErrorKind::Script, message, err)
    }
}

/// Runs one configured script for one package change.
///
/// This is a seam so the dispatch loop can be exercised without spawning
/// processes; production code uses [`ProcessRunner`].
pub trait ScriptRunner: Send + Sync + std::fmt::Debug {
    /// Invokes `script` with the package name and origin as arguments,
    /// blocking until the process exits.
    fn run(&self, script: &str, name: &str, origin: &str) -> Result<(), RunnerError>;
}

/// Script runner backed by blocking `std::process` execution.
///
/// The child is spawned as `script <name> <origin>` with the plugin's
/// environment and stdio, and waited on before the next invocation
/// starts. No timeout is enforced: a hung script blocks the whole batch.
/// Waits interrupted by signals are retried by the standard library.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Creates a new process runner.
    pub fn new() -> Self {
        Self
    }
}

impl ScriptRunner for ProcessRunner {
    fn run(&self, script: &str, name: &str, origin: &str) -> Result<(), RunnerError> {
        tracing::debug!(script = %script, name = %name, origin = %origin, "Running script");

        let mut child =
            Command::new(script)
                .arg(name)
                .arg(origin)
                .spawn()
                .map_err(|source| RunnerError::Spawn {
                    script: script.to_string(),
                    name: name.to_string(),
                    origin: origin.to_string(),
                    source,
                })?;

        let status = child.wait().map_err(|source| RunnerError::Wait {
            script: script.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(RunnerError::ExitStatus {
                script: script.to_string(),
                name: name.to_string(),
                origin: origin.to_string(),
                code: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}
