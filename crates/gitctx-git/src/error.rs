//! Error types for gitctx-git

use std::path::PathBuf;

/// Result type for gitctx-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitctx-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Exec(#[from] gitctx_exec::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] gitctx_fs::Error),

    #[error("Could not find .git in {path} or any parent directory")]
    NotARepository { path: PathBuf },

    #[error("Operation '{operation}' needs a remote but the context is local-only")]
    LocalOnly { operation: String },

    #[error("Refusing to check out '{reference}': references may not start with '-'")]
    InvalidReference { reference: String },

    #[error("Could not parse {what} from git output {output:?}")]
    Parse { what: String, output: String },
}
