//! Error types for gitctx-exec

use std::path::PathBuf;

/// Result type for command execution
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running an external command
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program could not be started at all
    #[error("Failed to run `{command}` in {dir}: {source}")]
    Spawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("`{command}` failed in {dir} (exit code {code}): {}", .stderr.trim())]
    Failed {
        command: String,
        dir: PathBuf,
        /// Exit code, or -1 when terminated by a signal
        code: i32,
        stdout: String,
        stderr: String,
    },
}

impl Error {
    /// Captured stderr, when the program ran.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Failed { stderr, .. } => Some(stderr),
            Self::Spawn { .. } => None,
        }
    }
}
