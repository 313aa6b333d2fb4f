//! Message output sinks

use colored::Colorize;

/// Receives informational, warning and error messages.
///
/// Nothing returned by an `Output` is ever consulted by callers.
pub trait Output: Send + Sync {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes colored messages to stderr, leaving stdout to command results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn info(&self, message: &str) {
        eprintln!("{} {}", "=>".blue().bold(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{}: {}", "warning".yellow().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }
}

/// Forwards messages to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOutput;

impl Output for TracingOutput {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
