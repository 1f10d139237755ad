//! Schemantic CLI entry point.
//!
//! Binary name: `smtc`
//!
//! Parses CLI arguments, initializes tracing, loads configuration, then
//! dispatches to the ingest, search, or status command. The process always
//! terminates normally; failures are reported through the exit status.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,schemantic_core=debug,schemantic_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = schemantic_infra::config::load_config(&cli.config).await;

    match cli.command {
        Commands::Ingest => cli::ingest::ingest(config, cli.json, cli.quiet).await,

        Commands::Search { query, limit } => {
            cli::search::search(config, &query, limit, cli.json).await?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Status => {
            cli::status::status(config, cli.json).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
