//! Read-only query commands

use std::path::Path;

use colored::{ColoredString, Colorize};
use gitctx_git::{Context, Status};

use crate::error::Result;

/// Print whether `dir` is inside a working tree and return the answer.
pub fn run_is_git(ctx: &Context, dir: &Path) -> bool {
    let inside = ctx.is_git(dir);
    println!("{inside}");
    inside
}

/// Run the status command
pub fn run_status(ctx: &Context, dir: &Path, json: bool) -> Result<()> {
    let status = ctx.status(dir)?;

    if json {
        let value = serde_json::json!({
            "path": dir.display().to_string(),
            "policy": ctx.status_policy(),
            "status": status,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", paint(status));
    }
    Ok(())
}

/// Status name colored by severity
pub(crate) fn paint(status: Status) -> ColoredString {
    let name = status.as_str();
    match status {
        Status::Clean => name.green().bold(),
        Status::Uncommitted | Status::Unpushed => name.yellow().bold(),
        Status::Detached | Status::NoUpstream | Status::NotMaster => name.red().bold(),
        Status::Unknown => name.dimmed(),
    }
}

pub fn run_top_level(ctx: &Context, dir: &Path) -> Result<()> {
    println!("{}", ctx.top_level(dir)?);
    Ok(())
}

pub fn run_sha(ctx: &Context, dir: &Path) -> Result<()> {
    println!("{}", ctx.sha(dir)?);
    Ok(())
}

/// Print each tag at HEAD on its own line.
pub fn run_tags(ctx: &Context, dir: &Path) -> Result<()> {
    for tag in ctx.tags(dir)? {
        println!("{tag}");
    }
    Ok(())
}

/// Print the most recent tag; prints nothing when there are no tags.
pub fn run_latest_tag(ctx: &Context, dir: &Path) -> Result<()> {
    let tag = ctx.most_recent_tag(dir)?;
    if !tag.is_empty() {
        println!("{tag}");
    }
    Ok(())
}

pub fn run_remote_url(ctx: &Context, dir: &Path) -> Result<()> {
    println!("{}", ctx.remote_origin_url(dir)?);
    Ok(())
}

pub fn run_branch(ctx: &Context, dir: &Path) -> Result<()> {
    println!("{}", ctx.abbrev_ref(dir)?);
    Ok(())
}

pub fn run_commit_time(ctx: &Context, dir: &Path) -> Result<()> {
    println!("{}", ctx.commit_time(dir)?.to_rfc3339());
    Ok(())
}
