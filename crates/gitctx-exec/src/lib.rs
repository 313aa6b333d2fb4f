//! Process execution and message output for gitctx
//!
//! Runs external commands synchronously in a working directory, capturing
//! stdout and stderr, and routes failures through a [`FailurePolicy`]:
//!
//! - `Silent` returns the error untouched
//! - `Warn` reports it through [`Output`] and returns it
//! - `Exit` reports it and hands control to a [`Terminate`] strategy
//! - `Panic` reports it and panics

pub mod command;
pub mod error;
pub mod executor;
pub mod output;
pub mod policy;

pub use command::CommandLine;
pub use error::{Error, Result};
pub use executor::{CommandOutput, Executor, SystemExecutor};
pub use output::{ConsoleOutput, Output, TracingOutput};
pub use policy::{ExecMode, FailureHandler, FailurePolicy, ProcessExit, Terminate};
