//! Working tree root discovery without invoking git
//!
//! `git rev-parse --show-toplevel` resolves symlinks, so a repository reached
//! through a symlinked path would be reported under its real location. The
//! walk here keeps the caller's spelling of the path.

use std::path::Path;

use gitctx_fs::{NormalizedPath, RepoPath};

use crate::{Error, Result};

/// Find the nearest directory at or above `path` that contains `.git`.
///
/// `path` is made absolute and normalized lexically first. A `.git` file
/// (worktrees, submodules) counts as well as a directory.
pub fn find_top_level(path: impl AsRef<Path>) -> Result<NormalizedPath> {
    let start = NormalizedPath::absolute(path.as_ref())?;

    for candidate in start.ancestors() {
        let marker = candidate.join(RepoPath::GitDir.as_str());
        tracing::trace!(candidate = %candidate, "Checking for git metadata");
        if marker.exists() {
            return Ok(candidate);
        }
    }

    Err(Error::NotARepository {
        path: start.to_native(),
    })
}
