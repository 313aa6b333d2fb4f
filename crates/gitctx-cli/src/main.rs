//! gitctx CLI
//!
//! Command-line front end for typed git repository queries.

mod cli;
mod commands;
mod context;
mod error;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.global.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} Typed git repository queries", "gitctx".green().bold());
        println!();
        println!("Run {} for available commands.", "gitctx --help".cyan());
        return Ok(ExitCode::SUCCESS);
    };

    let ctx = context::build_context(&cli.global)?;
    let dir = cli.global.dir.as_path();

    match command {
        Commands::IsGit => {
            let inside = commands::run_is_git(&ctx, dir);
            return Ok(if inside {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Commands::Status { json } => commands::run_status(&ctx, dir, json)?,
        Commands::TopLevel => commands::run_top_level(&ctx, dir)?,
        Commands::Sha => commands::run_sha(&ctx, dir)?,
        Commands::Tags => commands::run_tags(&ctx, dir)?,
        Commands::LatestTag => commands::run_latest_tag(&ctx, dir)?,
        Commands::RemoteUrl => commands::run_remote_url(&ctx, dir)?,
        Commands::Branch => commands::run_branch(&ctx, dir)?,
        Commands::CommitTime => commands::run_commit_time(&ctx, dir)?,
        Commands::Clone { url, target } => {
            commands::run_clone(&ctx, dir, &url, target.as_deref())?
        }
        Commands::Checkout { reference } => commands::run_checkout(&ctx, dir, &reference)?,
        Commands::Pull => commands::run_pull(&ctx, dir)?,
        Commands::Info { timings, json } => commands::run_info(&ctx, dir, timings, json)?,
    }

    Ok(ExitCode::SUCCESS)
}
