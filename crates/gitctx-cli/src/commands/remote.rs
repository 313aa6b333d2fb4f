//! Commands that change the working tree

use std::path::{Path, PathBuf};

use colored::Colorize;
use gitctx_git::Context;

use crate::error::{CliError, Result};

/// Clone `url` into `target`, or into a directory named after the
/// repository when no target is given. Relative targets resolve against `dir`.
pub fn run_clone(ctx: &Context, dir: &Path, url: &str, target: Option<&Path>) -> Result<()> {
    let target = match target {
        Some(target) => dir.join(target),
        None => dir.join(default_target(url)?),
    };

    println!(
        "{} Cloning {} into {}...",
        "=>".blue().bold(),
        url.cyan(),
        target.display().to_string().yellow()
    );
    ctx.clone_repo(&target, url)?;
    println!("{} Cloned.", "OK".green().bold());
    Ok(())
}

pub fn run_checkout(ctx: &Context, dir: &Path, reference: &str) -> Result<()> {
    ctx.checkout(dir, reference)?;
    println!("{} Checked out {}.", "OK".green().bold(), reference.cyan());
    Ok(())
}

pub fn run_pull(ctx: &Context, dir: &Path) -> Result<()> {
    ctx.pull(dir)?;
    println!("{} Pulled.", "OK".green().bold());
    Ok(())
}

/// Directory name git itself would pick for `url`.
fn default_target(url: &str) -> Result<PathBuf> {
    let trimmed = url.trim_end_matches(['/', '\\']);
    let last = trimmed
        .rsplit(['/', '\\', ':'])
        .next()
        .unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() {
        return Err(CliError::user(format!(
            "Cannot derive a directory name from '{url}'; pass a target"
        )));
    }
    Ok(PathBuf::from(name))
}
