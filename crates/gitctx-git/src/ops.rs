//! Single-command queries and operations

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use gitctx_exec::{ExecMode, FailurePolicy};
use gitctx_fs::{NormalizedPath, io};

use crate::text::{first_line, split_lines};
use crate::toplevel::find_top_level;
use crate::{Context, Error, Flag, Result};

/// stderr marker from `git describe` when no tag is reachable
const NO_TAGS_MESSAGE: &str = "No names found, cannot describe anything";

impl Context {
    /// Whether `path` lies inside a git working tree.
    ///
    /// Failures never escalate past a warning; a failed check is `false`.
    pub fn is_git(&self, path: impl AsRef<Path>) -> bool {
        let mode = ExecMode {
            on_failure: self.exec_mode().on_failure.non_fatal(),
            ..self.exec_mode()
        };
        let cmd = self.git(["rev-parse", "--is-inside-work-tree"]);

        match self.run(path.as_ref(), &cmd, mode) {
            Ok(out) => first_line(&out) == "true",
            Err(_) => false,
        }
    }

    /// Top-level directory of the working tree containing `path`.
    ///
    /// Found by looking for `.git` in `path` and each of its parents; git is
    /// not invoked, so symlinks in `path` are preserved.
    pub fn top_level(&self, path: impl AsRef<Path>) -> Result<NormalizedPath> {
        find_top_level(path)
    }

    /// Full commit id of HEAD.
    pub fn sha(&self, path: impl AsRef<Path>) -> Result<String> {
        let cmd = self.git(["rev-parse", "HEAD"]);
        Ok(first_line(&self.run(path.as_ref(), &cmd, self.exec_mode())?))
    }

    /// Tags pointing exactly at HEAD, sorted by name.
    pub fn tags(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let cmd = self.git(["tag", "--points-at", "HEAD"]);
        Ok(split_lines(&self.run(path.as_ref(), &cmd, self.exec_mode())?))
    }

    /// Most recent tag reachable from HEAD, or an empty string when the
    /// repository has no tags.
    pub fn most_recent_tag(&self, path: impl AsRef<Path>) -> Result<String> {
        let dir = path.as_ref();
        let cmd = self.git(["describe", "--abbrev=0", "--tags"]);

        match self.run(dir, &cmd, self.quiet()) {
            Ok(out) => Ok(first_line(&out)),
            Err(Error::Exec(e)) if e.stderr().is_some_and(|s| s.contains(NO_TAGS_MESSAGE)) => {
                Ok(String::new())
            }
            Err(_) => {
                // Run again under the configured policy so the real failure is reported
                let on_failure = match self.exec_mode().on_failure {
                    FailurePolicy::Silent => FailurePolicy::Warn,
                    other => other,
                };
                let mode = ExecMode {
                    on_failure,
                    ..self.exec_mode()
                };
                Ok(first_line(&self.run(dir, &cmd, mode)?))
            }
        }
    }

    /// URL of the `origin` remote.
    pub fn remote_origin_url(&self, path: impl AsRef<Path>) -> Result<String> {
        let cmd = self.git(["config", "--get", "remote.origin.url"]);
        Ok(first_line(&self.run(path.as_ref(), &cmd, self.exec_mode())?))
    }

    /// Short name of the branch HEAD points at (`HEAD` when detached).
    pub fn abbrev_ref(&self, path: impl AsRef<Path>) -> Result<String> {
        let cmd = self.git(["rev-parse", "--abbrev-ref", "HEAD"]);
        Ok(first_line(&self.run(path.as_ref(), &cmd, self.exec_mode())?))
    }

    /// Committer time of HEAD.
    pub fn commit_time(&self, path: impl AsRef<Path>) -> Result<DateTime<Utc>> {
        let cmd = self.git(["log", "-1", "--format=%ct", "HEAD"]);
        let out = first_line(&self.run(path.as_ref(), &cmd, self.exec_mode())?);

        out.trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .ok_or_else(|| Error::Parse {
                what: "commit time".into(),
                output: out.clone(),
            })
    }

    /// Clone `url` into `target`, creating the directory tree first.
    pub fn clone_repo(&self, target: impl AsRef<Path>, url: &str) -> Result<()> {
        self.require_remote("clone")?;

        let target = NormalizedPath::new(target.as_ref());
        if let Err(e) = io::ensure_dir(&target) {
            let err = Error::from(e);
            self.failure().handle(self.exec_mode().on_failure, &err);
            return Err(err);
        }

        let cmd = self.git(["clone", "--", url, "."]);
        self.run(&target.to_native(), &cmd, self.exec_mode())?;
        Ok(())
    }

    /// Check out `reference` (branch, tag or commit).
    ///
    /// `-` (the previous branch) is accepted; any other reference starting
    /// with `-` would be read as an option and is refused.
    pub fn checkout(&self, target: impl AsRef<Path>, reference: &str) -> Result<()> {
        if reference.starts_with('-') && reference != "-" {
            return Err(Error::InvalidReference {
                reference: reference.to_string(),
            });
        }

        let cmd = self.git(["checkout", reference]);
        self.run(target.as_ref(), &cmd, self.exec_mode())?;
        Ok(())
    }

    /// Pull the current branch from its upstream.
    pub fn pull(&self, target: impl AsRef<Path>) -> Result<()> {
        self.require_remote("pull")?;

        let cmd = self.git(["pull"]);
        self.run(target.as_ref(), &cmd, self.exec_mode())?;
        Ok(())
    }

    fn require_remote(&self, operation: &str) -> Result<()> {
        if self.has_flag(Flag::LocalOnly) {
            return Err(Error::LocalOnly {
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}
