//! Pull command implementation

use aav_appsync::ResolverApi;
use aav_core::{Prompter, PullReport, Synchronizer};
use colored::Colorize;

use crate::error::Result;

/// Run the pull command
pub fn run_pull<A: ResolverApi, P: Prompter>(
    sync: &Synchronizer<A, P>,
    yes: bool,
    json: bool,
) -> Result<PullReport> {
    if !json {
        println!(
            "{} Pulling resolvers into {}...",
            "=>".blue().bold(),
            sync.config().resolvers_root().as_str().cyan()
        );
    }

    let report = sync.pull(yes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    if report.created_root {
        println!(
            "   {} {}",
            "Created".green(),
            sync.config().resolvers_root()
        );
    }
    for path in &report.kept {
        println!("   {} {}", "Kept".yellow(), path);
    }
    for coordinate in &report.skipped {
        println!("   {} {} (no mapping templates)", "Skipped".dimmed(), coordinate);
    }

    println!(
        "{} {} resolver(s) pulled.",
        "OK".green().bold(),
        report.written.len()
    );
    Ok(report)
}
