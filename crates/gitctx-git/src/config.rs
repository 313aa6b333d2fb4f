//! Behavior flags and context configuration

use gitctx_exec::{ExecMode, FailurePolicy};
use gitctx_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Result, StatusPolicy};

/// Behavior switches for a [`crate::Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    /// Terminate the process when a command fails
    Must,
    /// Panic when a command fails
    Panic,
    /// Warn when a command fails
    Warn,
    /// Echo each command line before running it
    Verbose,
    /// Refuse operations that talk to a remote
    LocalOnly,
}

/// Translate behavior flags into the execution mode used for commands
/// whose failure is reported to the caller.
///
/// `Panic` outranks `Must`, which outranks `Warn`. `LocalOnly` has no
/// execution counterpart.
pub fn exec_mode(flags: &[Flag]) -> ExecMode {
    let on_failure = if flags.contains(&Flag::Panic) {
        FailurePolicy::Panic
    } else if flags.contains(&Flag::Must) {
        FailurePolicy::Exit
    } else if flags.contains(&Flag::Warn) {
        FailurePolicy::Warn
    } else {
        FailurePolicy::Silent
    };

    ExecMode::new(on_failure).with_echo(flags.contains(&Flag::Verbose))
}

/// File-backed configuration for a [`crate::Context`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContextConfig {
    pub flags: Vec<Flag>,
    pub status_policy: StatusPolicy,
    /// Remote branch a clean repository must be contained in
    pub mainline: String,
    /// The git executable
    pub program: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            flags: Vec::new(),
            status_policy: StatusPolicy::default(),
            mainline: "origin/master".into(),
            program: "git".into(),
        }
    }
}

impl ContextConfig {
    /// Load from a `.toml` or `.json` file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Add `flag` unless already present.
    pub fn with_flag(mut self, flag: Flag) -> Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }
}
