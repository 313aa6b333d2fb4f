//! Repository context: configuration shared by every operation

use std::path::Path;
use std::sync::Arc;

use gitctx_exec::{CommandLine, ExecMode, Executor, FailureHandler, Output, SystemExecutor};

use crate::config::{self, ContextConfig, Flag};
use crate::escape::{self, EscapeMode};
use crate::status::{self, Probe, Status, StatusPolicy};
use crate::Result;

/// Entry point for typed git queries and operations.
///
/// A context is stateless between calls; every operation takes the directory
/// to run in. The only shared state is the process-wide escape mode (see
/// [`crate::escape`]). Contexts are `Send + Sync` and may be used from many
/// threads at once.
#[derive(Clone)]
pub struct Context {
    executor: Arc<dyn Executor>,
    failure: FailureHandler,
    flags: Vec<Flag>,
    mode: ExecMode,
    status_policy: StatusPolicy,
    mainline: String,
    program: String,
}

impl Context {
    /// Create a context that runs `git` as a child process and reports
    /// through `output`. Fatal failures exit the process.
    pub fn new(output: Arc<dyn Output>, flags: &[Flag]) -> Self {
        let failure = FailureHandler::with_process_exit(output);
        let executor = Arc::new(SystemExecutor::new(failure.clone()));
        Self::with_executor(executor, failure, flags)
    }

    /// Create a context from its collaborators.
    ///
    /// `failure` is used for failures detected by the context itself; the
    /// executor applies its own handling to command failures.
    pub fn with_executor(
        executor: Arc<dyn Executor>,
        failure: FailureHandler,
        flags: &[Flag],
    ) -> Self {
        let defaults = ContextConfig::default();
        Self {
            executor,
            failure,
            flags: flags.to_vec(),
            mode: config::exec_mode(flags),
            status_policy: defaults.status_policy,
            mainline: defaults.mainline,
            program: defaults.program,
        }
    }

    /// Create a system context from a loaded configuration.
    pub fn from_config(output: Arc<dyn Output>, config: &ContextConfig) -> Self {
        Self::new(output, &config.flags)
            .with_status_policy(config.status_policy)
            .with_mainline(config.mainline.clone())
            .with_program(config.program.clone())
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Remote branch that must contain HEAD for a `Clean` status.
    pub fn with_mainline(mut self, mainline: impl Into<String>) -> Self {
        self.mainline = mainline.into();
        self
    }

    /// The git executable to invoke.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Execution mode for commands whose failure reaches the caller.
    pub fn exec_mode(&self) -> ExecMode {
        self.mode
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Classify the working tree at `path`.
    ///
    /// An error means the status is [`Status::Unknown`].
    pub fn status(&self, path: impl AsRef<Path>) -> Result<Status> {
        let dir = path.as_ref();
        let status = status::classify(self.status_policy, &self.mainline, |probe| {
            self.run_probe(dir, probe)
        })?;

        tracing::debug!(path = %dir.display(), %status, policy = ?self.status_policy, "Classified status");
        Ok(status)
    }

    fn run_probe(&self, dir: &Path, probe: Probe) -> Result<String> {
        let (args, mode): (&[&str], ExecMode) = match probe {
            Probe::WorkingTree => (&["status", "--porcelain"], self.mode),
            Probe::HeadCommit => (&["rev-parse", "--verify", "--quiet", "HEAD"], self.quiet()),
            Probe::RemoteContains => (&["branch", "--remote", "--contains", "HEAD"], self.mode),
            Probe::SymbolicHead => (&["symbolic-ref", "--quiet", "HEAD"], self.quiet()),
            Probe::Upstream => (
                &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"],
                self.quiet(),
            ),
            Probe::Unpushed => (&["rev-list", "@{u}..HEAD"], self.mode),
        };

        let mut cmd = self.git(args.iter().copied());
        if probe.needs_escape() {
            self.ensure_escape(dir);
            cmd = cmd.map_args(escape::escape);
        }
        self.run(dir, &cmd, mode)
    }

    /// Decide the process-wide escape mode, probing in `dir` if needed.
    ///
    /// Failure of both probe forms is fatal: no upstream ref expression
    /// could be formed afterwards.
    pub fn ensure_escape(&self, dir: &Path) -> EscapeMode {
        let decided = escape::ensure_with(|mode| {
            let cmd = self
                .git(["rev-parse", "@{0}"])
                .map_args(|arg| escape::escape_with(mode, arg));
            self.executor.execute(dir, &cmd, self.quiet()).is_ok()
        });

        match decided {
            Some(mode) => mode,
            None => self.failure.fatal(&format!(
                "Could not determine if git curly braces need to be escaped: \
                 `git rev-parse @{{0}}` failed both with and without escaping in {}",
                dir.display()
            )),
        }
    }

    /// Build a git command line.
    pub(crate) fn git<I, S>(&self, args: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Messages are matched verbatim, so keep git's output untranslated
        CommandLine::new(self.program.as_str())
            .args(args)
            .env("LC_ALL", "C")
    }

    /// Run a command and return its stdout.
    pub(crate) fn run(&self, dir: &Path, cmd: &CommandLine, mode: ExecMode) -> Result<String> {
        Ok(self.executor.execute(dir, cmd, mode)?.stdout)
    }

    /// Mode for probes whose failure is an answer rather than an error.
    pub(crate) fn quiet(&self) -> ExecMode {
        ExecMode::silent().with_echo(self.mode.echo)
    }

    pub(crate) fn failure(&self) -> &FailureHandler {
        &self.failure
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("flags", &self.flags)
            .field("mode", &self.mode)
            .field("status_policy", &self.status_policy)
            .field("mainline", &self.mainline)
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}
