//! Info command implementation

use std::path::Path;

use colored::Colorize;
use gitctx_git::{Context, InfoReport};

use crate::error::Result;

/// Run the info command
pub fn run_info(ctx: &Context, dir: &Path, timings: bool, json: bool) -> Result<()> {
    let report = ctx.report(dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, timings);
    Ok(())
}

fn print_report(report: &InfoReport, timings: bool) {
    println!("{} {}", "Repository Info".bold(), report.path.dimmed());
    println!();

    let width = report
        .entries
        .iter()
        .map(|e| e.operation.len())
        .max()
        .unwrap_or(0);

    for entry in &report.entries {
        let label = format!("{:width$}", entry.operation);
        let value = match (&entry.value, &entry.error) {
            (Some(value), _) if value.is_empty() => "(none)".dimmed(),
            (Some(value), _) => value.normal(),
            (None, Some(error)) => error.red(),
            (None, None) => "".normal(),
        };

        if timings {
            println!(
                "{}  {}  {}",
                label.dimmed(),
                value,
                format!("{:.1}ms", entry.elapsed.as_secs_f64() * 1000.0).dimmed()
            );
        } else {
            println!("{}  {}", label.dimmed(), value);
        }
    }

    if timings {
        println!();
        println!(
            "{}: {:.1}ms",
            "Total".bold(),
            report.total_elapsed().as_secs_f64() * 1000.0
        );
    }
}
