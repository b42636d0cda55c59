//! Push command implementation

use aav_appsync::ResolverApi;
use aav_core::{Prompter, PushReport, Synchronizer};
use colored::Colorize;

use crate::error::Result;

/// Run the push command
///
/// Per-resolver failures are listed but do not fail the command.
pub fn run_push<A: ResolverApi, P: Prompter>(
    sync: &Synchronizer<A, P>,
    json: bool,
) -> Result<PushReport> {
    if !json {
        println!(
            "{} Pushing resolvers from {}...",
            "=>".blue().bold(),
            sync.config().resolvers_root().as_str().cyan()
        );
    }

    let report = sync.push()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    for coordinate in &report.skipped {
        println!("   {} {}", "Skipped".dimmed(), coordinate);
    }
    for failure in &report.failed {
        println!(
            "   {} {}: {}",
            "FAILED".red().bold(),
            failure.resolver,
            failure.message
        );
    }

    let status = if report.is_success() {
        "OK".green().bold()
    } else {
        "WARN".yellow().bold()
    };
    println!(
        "{} {} created, {} updated, {} failed.",
        status,
        report.created.len(),
        report.updated.len(),
        report.failed.len()
    );
    Ok(report)
}
