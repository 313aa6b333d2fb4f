//! Synchronous command execution

use std::path::Path;
use std::process::{Command, Stdio};

use crate::{CommandLine, Error, ExecMode, FailureHandler, Output, Result};

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs command lines in a working directory.
///
/// Implementations apply `mode.on_failure` before returning an error.
pub trait Executor: Send + Sync {
    fn execute(&self, dir: &Path, command: &CommandLine, mode: ExecMode) -> Result<CommandOutput>;
}

/// Executes commands as child processes of the current process.
#[derive(Debug, Clone)]
pub struct SystemExecutor {
    failure: FailureHandler,
}

impl SystemExecutor {
    pub fn new(failure: FailureHandler) -> Self {
        Self { failure }
    }
}

impl Executor for SystemExecutor {
    fn execute(&self, dir: &Path, command: &CommandLine, mode: ExecMode) -> Result<CommandOutput> {
        if mode.echo {
            self.failure
                .output()
                .info(&format!("{} $ {}", dir.display(), command));
        }

        let result = run(dir, command);
        if let Err(e) = &result {
            self.failure.handle(mode.on_failure, e);
        }
        result
    }
}

fn run(dir: &Path, command: &CommandLine) -> Result<CommandOutput> {
    tracing::debug!(cwd = %dir.display(), command = %command, "Running command");

    let mut cmd = Command::new(command.program());
    cmd.current_dir(dir)
        .args(command.get_args())
        .stdin(Stdio::null());
    for (key, value) in command.get_envs() {
        cmd.env(key, value);
    }

    let output = cmd.output().map_err(|source| Error::Spawn {
        command: command.to_string(),
        dir: dir.to_path_buf(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        let code = output.status.code().unwrap_or(-1);
        tracing::debug!(command = %command, code, "Command failed");
        Err(Error::Failed {
            command: command.to_string(),
            dir: dir.to_path_buf(),
            code,
            stdout,
            stderr,
        })
    }
}
