//! [`MockRepo`]: a working copy with a bare `origin` remote.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::git::{configure_identity, run_git};

/// A working copy cloned from a bare repository in a second temp directory.
///
/// After [`MockRepo::new`] the working copy is on `master` with one pushed
/// commit (`init`), and `master` tracks `origin/master`.
///
/// # Example
///
/// ```rust,no_run
/// use gitctx_test_utils::repo::MockRepo;
///
/// let repo = MockRepo::new();
/// repo.touch("mod");
/// repo.commit_all("mod");
/// repo.git(&["push", "origin", "master"]);
/// ```
pub struct MockRepo {
    bare: TempDir,
    work: TempDir,
}

impl Default for MockRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRepo {
    pub fn new() -> Self {
        let bare = TempDir::new().expect("MockRepo: failed to create bare dir");
        let work = TempDir::new().expect("MockRepo: failed to create work dir");

        run_git(bare.path(), &["init", "--bare"]);
        run_git(bare.path(), &["symbolic-ref", "HEAD", "refs/heads/master"]);

        let url = bare.path().to_string_lossy().to_string();
        run_git(work.path(), &["clone", &url, "."]);
        run_git(work.path(), &["symbolic-ref", "HEAD", "refs/heads/master"]);
        configure_identity(work.path());

        let repo = Self { bare, work };
        repo.touch("init");
        repo.commit_all("init");
        repo.git(&["push", "-u", "origin", "master"]);
        repo
    }

    /// Root of the working copy.
    pub fn path(&self) -> &Path {
        self.work.path()
    }

    /// Path of the bare `origin` repository.
    pub fn bare_path(&self) -> &Path {
        self.bare.path()
    }

    /// Run git in the working copy.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(self.path(), args)
    }

    /// Create an empty file relative to the working copy.
    pub fn touch(&self, name: &str) {
        let path = self.path().join(name);
        fs::write(&path, "").unwrap_or_else(|e| panic!("touch {}: {e}", path.display()));
    }

    /// Create a directory tree relative to the working copy.
    pub fn mkdir_p(&self, relative: &str) -> std::path::PathBuf {
        let path = self.path().join(relative);
        fs::create_dir_all(&path).unwrap_or_else(|e| panic!("mkdir {}: {e}", path.display()));
        path
    }

    /// Stage everything and commit it.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-m", message]);
    }
}
