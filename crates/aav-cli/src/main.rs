//! aav CLI
//!
//! Pulls, pushes and removes AppSync resolver mapping templates.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, RmTarget};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => {
            eprintln!("{}: failed to load .env: {}", "warning".yellow().bold(), e)
        }
        _ => {}
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    execute_command(&cli)
}

/// Progress goes to stderr so `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_level(verbose)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cli: &Cli) -> Result<()> {
    let sync = context::synchronizer(cli)?;
    match &cli.command {
        Commands::Pull { yes, json } => commands::run_pull(&sync, *yes, *json).map(drop),
        Commands::Push { yes: _, json } => commands::run_push(&sync, *json).map(drop),
        Commands::Rm { target } => match target {
            RmTarget::Type => commands::run_rm_type(&sync).map(drop),
            RmTarget::Resolver => commands::run_rm_resolver(&sync).map(drop),
        },
    }
}
