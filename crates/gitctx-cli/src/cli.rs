//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gitctx_git::{Flag, StatusPolicy};

/// gitctx - Typed queries over the git command line
#[derive(Parser, Debug)]
#[command(name = "gitctx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Echo git command lines and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Send command echo and failure messages to the log instead of the terminal
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Exit the process when a git command fails
    #[arg(long, global = true)]
    pub must: bool,

    /// Panic when a git command fails
    #[arg(long, global = true)]
    pub panic: bool,

    /// Print a warning when a git command fails
    #[arg(long, global = true)]
    pub warn: bool,

    /// Refuse commands that talk to a remote
    #[arg(long, global = true)]
    pub local_only: bool,

    /// How `status` decides whether a repository is clean
    #[arg(long, global = true, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Remote branch that must contain HEAD for a clean status
    #[arg(long, global = true)]
    pub mainline: Option<String>,

    /// Configuration file (.toml or .json)
    #[arg(long, global = true, env = "GITCTX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run as if started in this directory
    #[arg(short = 'C', global = true, default_value = ".")]
    pub dir: PathBuf,
}

impl GlobalArgs {
    /// Behavior flags selected on the command line.
    pub fn flags(&self) -> Vec<Flag> {
        [
            (self.must, Flag::Must),
            (self.panic, Flag::Panic),
            (self.warn, Flag::Warn),
            (self.verbose, Flag::Verbose),
            (self.local_only, Flag::LocalOnly),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect()
    }
}

/// Status policy names accepted by `--policy`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    RemoteContainment,
    UpstreamTracking,
}

impl From<PolicyArg> for StatusPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::RemoteContainment => StatusPolicy::RemoteContainment,
            PolicyArg::UpstreamTracking => StatusPolicy::UpstreamTracking,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check whether the directory is inside a git working tree
    ///
    /// Prints `true` or `false` and exits with 0 or 1 accordingly.
    IsGit,

    /// Classify the working tree
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the top-level directory of the working tree
    TopLevel,

    /// Print the commit id of HEAD
    Sha,

    /// List tags pointing at HEAD
    Tags,

    /// Print the most recent tag reachable from HEAD
    LatestTag,

    /// Print the URL of the origin remote
    RemoteUrl,

    /// Print the current branch name
    Branch,

    /// Print the committer time of HEAD
    CommitTime,

    /// Clone a repository
    ///
    /// Examples:
    ///   gitctx clone https://example.com/tools.git         # into ./tools
    ///   gitctx clone https://example.com/tools.git vendor  # into ./vendor
    Clone {
        /// Repository URL
        url: String,

        /// Target directory, created if missing
        target: Option<PathBuf>,
    },

    /// Check out a branch, tag or commit
    Checkout {
        /// Reference to check out
        reference: String,
    },

    /// Pull the current branch from its upstream
    Pull,

    /// Run every query and summarize the results
    Info {
        /// Show how long each query took
        #[arg(long)]
        timings: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
