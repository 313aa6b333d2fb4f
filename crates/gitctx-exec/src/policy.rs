//! Failure handling policies

use std::fmt;
use std::sync::Arc;

use crate::Output;

/// What to do when a command fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Return the error without reporting it
    #[default]
    Silent,
    /// Report the error as a warning and return it
    Warn,
    /// Report the error and terminate the process
    Exit,
    /// Report the error and panic
    Panic,
}

impl FailurePolicy {
    /// Whether this policy ends the caller's control flow on failure.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Exit | Self::Panic)
    }

    /// The same policy with fatal outcomes downgraded to a warning.
    pub fn non_fatal(self) -> Self {
        if self.is_fatal() { Self::Warn } else { self }
    }
}

/// Per-invocation execution settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecMode {
    pub on_failure: FailurePolicy,
    /// Report the command line through [`Output::info`] before running it
    pub echo: bool,
}

impl ExecMode {
    pub fn new(on_failure: FailurePolicy) -> Self {
        Self {
            on_failure,
            echo: false,
        }
    }

    /// A mode that never reports or escalates.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

/// Strategy for ending the process after a fatal failure.
pub trait Terminate: Send + Sync {
    fn terminate(&self, code: i32) -> !;
}

/// Terminates via [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

/// Applies a [`FailurePolicy`] using an output sink and a termination strategy.
#[derive(Clone)]
pub struct FailureHandler {
    output: Arc<dyn Output>,
    terminate: Arc<dyn Terminate>,
}

impl FailureHandler {
    pub fn new(output: Arc<dyn Output>, terminate: Arc<dyn Terminate>) -> Self {
        Self { output, terminate }
    }

    /// Handler that exits the process on fatal failures.
    pub fn with_process_exit(output: Arc<dyn Output>) -> Self {
        Self::new(output, Arc::new(ProcessExit))
    }

    pub fn output(&self) -> &dyn Output {
        self.output.as_ref()
    }

    /// Report `message` as an error and terminate with exit code 1.
    pub fn fatal(&self, message: &str) -> ! {
        self.output.error(message);
        self.terminate.terminate(1)
    }

    /// Route `err` according to `policy`.
    ///
    /// Returns normally only for `Silent` and `Warn`.
    pub fn handle(&self, policy: FailurePolicy, err: &dyn fmt::Display) {
        match policy {
            FailurePolicy::Silent => {}
            FailurePolicy::Warn => self.output.warning(&err.to_string()),
            FailurePolicy::Exit => self.fatal(&err.to_string()),
            FailurePolicy::Panic => {
                self.output.error(&err.to_string());
                panic!("{err}");
            }
        }
    }
}

impl fmt::Debug for FailureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureHandler").finish_non_exhaustive()
    }
}
