//! Brokkr CLI - CI release helper for platform compiler binary packages
//!
//! This is the main entry point for the brokkr command-line interface.

mod cli;
mod commands;
mod output;
mod version;

use std::process::ExitCode;

use brokkr_sync::SyncKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command. Sync commands report a failing outcome as an exit
    // status rather than an error so sibling work keeps running.
    match cli.command {
        Commands::PushCommits(args) => {
            sync_exit(commands::push::run(args, SyncKind::Commits).await)
        }
        Commands::PushTags(args) => sync_exit(commands::push::run(args, SyncKind::Tags).await),
        Commands::PushAll(args) => sync_exit(commands::push::run_all(args).await),
        Commands::BuildImage(args) => unit_exit(commands::image::run(args).await),
        Commands::Version(args) => unit_exit(commands::version::run(args)),
    }
}

/// Translate a sync outcome into the process exit status.
fn sync_exit(result: anyhow::Result<brokkr_sync::SyncOutcome>) -> ExitCode {
    match result {
        Ok(outcome) if outcome.is_failure() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Translate a plain command result into the process exit status.
fn unit_exit(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Default to info level so CI logs show sync progress.
            // Use --quiet to suppress, or -v/-vv for more detail.
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
