//! Building a git context from command-line options

use std::sync::Arc;

use gitctx_exec::{ConsoleOutput, Output, TracingOutput};
use gitctx_fs::{NormalizedPath, RepoPath};
use gitctx_git::{Context, ContextConfig, find_top_level};

use crate::cli::GlobalArgs;
use crate::error::Result;

/// Resolve configuration and create the context commands run against.
///
/// An explicit `--config` wins; otherwise `gitctx.toml` at the top level of
/// the working tree is used when present. Command-line options are applied
/// on top.
pub fn build_context(global: &GlobalArgs) -> Result<Context> {
    let mut config = match config_path(global) {
        Some(path) => {
            tracing::debug!(path = %path, "Using config file");
            ContextConfig::load(&path)?
        }
        None => ContextConfig::default(),
    };

    for flag in global.flags() {
        config = config.with_flag(flag);
    }
    if let Some(policy) = global.policy {
        config.status_policy = policy.into();
    }
    if let Some(mainline) = &global.mainline {
        config.mainline = mainline.clone();
    }

    let output: Arc<dyn Output> = if global.quiet {
        Arc::new(TracingOutput)
    } else {
        Arc::new(ConsoleOutput::new())
    };
    Ok(Context::from_config(output, &config))
}

fn config_path(global: &GlobalArgs) -> Option<NormalizedPath> {
    if let Some(path) = &global.config {
        return Some(NormalizedPath::new(path));
    }

    let candidate = find_top_level(&global.dir)
        .ok()?
        .join(RepoPath::ConfigFile.as_str());
    candidate.is_file().then_some(candidate)
}
