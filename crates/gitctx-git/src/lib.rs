//! Typed queries and operations over the git command line
//!
//! Every repository fact is obtained by invoking `git` through a
//! [`gitctx_exec::Executor`] and parsing its text output. The one exception is
//! [`Context::top_level`], which walks the filesystem so that symlinked
//! paths keep their own ancestry.

pub mod config;
pub mod context;
pub mod error;
pub mod escape;
mod ops;
pub mod report;
pub mod status;
mod text;
pub mod toplevel;

pub use config::{ContextConfig, Flag};
pub use context::Context;
pub use error::{Error, Result};
pub use escape::EscapeMode;
pub use report::{InfoReport, ReportEntry};
pub use status::{Probe, Status, StatusPolicy, classify};
pub use toplevel::find_top_level;
