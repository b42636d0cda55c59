//! Rm command implementations

use aav_appsync::ResolverApi;
use aav_core::{DeleteOutcome, DeleteReport, Prompter, Synchronizer};
use colored::Colorize;

use crate::error::Result;

/// Run `rm type`
pub fn run_rm_type<A: ResolverApi, P: Prompter>(
    sync: &Synchronizer<A, P>,
) -> Result<DeleteOutcome> {
    let outcome = sync.delete_type()?;
    print_outcome(&outcome);
    Ok(outcome)
}

/// Run `rm resolver`
pub fn run_rm_resolver<A: ResolverApi, P: Prompter>(
    sync: &Synchronizer<A, P>,
) -> Result<DeleteOutcome> {
    let outcome = sync.delete_resolver()?;
    print_outcome(&outcome);
    Ok(outcome)
}

fn print_outcome(outcome: &DeleteOutcome) {
    match outcome {
        DeleteOutcome::NothingToDo => println!("Nothing to do"),
        DeleteOutcome::NoResolvers { type_name } => {
            println!("No resolvers for the {} found", type_name)
        }
        DeleteOutcome::Done(report) => print_report(report),
    }
}

fn print_report(report: &DeleteReport) {
    if report.removed_resolvers.is_empty() && report.removed_types.is_empty() {
        println!("{} Nothing selected.", "=>".blue().bold());
        return;
    }
    println!(
        "{} Removed {} resolver(s), {} deleted remotely.",
        "OK".green().bold(),
        report.removed_resolvers.len(),
        report.remote_deletes.len()
    );
    for type_name in &report.kept_types {
        println!(
            "   {} {} (directory holds other files)",
            "Kept".yellow(),
            type_name
        );
    }
}
