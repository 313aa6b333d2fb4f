//! Test doubles for the execution and output collaborators.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use gitctx_exec::{CommandLine, CommandOutput, Error, ExecMode, Executor, Output, Terminate};

#[derive(Debug, Clone)]
enum Response {
    Success(String),
    Failure(String),
}

/// An [`Executor`] that answers from a script instead of running anything.
///
/// Commands are keyed by their arguments joined with single spaces (the
/// program name is ignored). Unscripted commands fail with exit code 1.
/// Every call is recorded, so tests can count invocations. Failure policies
/// are not applied.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: HashMap<String, Response>,
    calls: Mutex<Vec<String>>,
    delay: Duration,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `args` with a successful `stdout`.
    pub fn respond(mut self, args: &str, stdout: &str) -> Self {
        self.responses
            .insert(args.to_string(), Response::Success(stdout.to_string()));
        self
    }

    /// Answer `args` with a failure carrying `stderr`.
    pub fn fail(mut self, args: &str, stderr: &str) -> Self {
        self.responses
            .insert(args.to_string(), Response::Failure(stderr.to_string()));
        self
    }

    /// Sleep for `delay` inside every call, widening race windows.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// All calls so far, as argument strings, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made with exactly `args`.
    pub fn count(&self, args: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == args).count()
    }
}

impl Executor for ScriptedExecutor {
    fn execute(
        &self,
        dir: &Path,
        command: &CommandLine,
        _mode: ExecMode,
    ) -> gitctx_exec::Result<CommandOutput> {
        let key = command.get_args().join(" ");
        self.calls.lock().unwrap().push(key.clone());

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let failure = |stderr: String| Error::Failed {
            command: command.to_string(),
            dir: dir.to_path_buf(),
            code: 1,
            stdout: String::new(),
            stderr,
        };

        match self.responses.get(&key) {
            Some(Response::Success(stdout)) => Ok(CommandOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Some(Response::Failure(stderr)) => Err(failure(stderr.clone())),
            None => Err(failure(format!("unscripted command: {key}"))),
        }
    }
}

/// An [`Output`] that keeps every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<(Level, String)>>,
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }

    fn push(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

impl Output for RecordingOutput {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

/// A [`Terminate`] strategy that panics with `terminated with <code>`.
///
/// Lets tests observe fatal paths with `#[should_panic]` or `catch_unwind`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicTerminate;

impl Terminate for PanicTerminate {
    fn terminate(&self, code: i32) -> ! {
        panic!("terminated with {code}")
    }
}
