//! Filesystem helpers for gitctx
//!
//! Provides symlink-preserving path normalization and config file loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::RepoPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
