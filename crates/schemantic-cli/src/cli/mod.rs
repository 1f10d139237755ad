//! CLI command definitions and dispatch for the `smtc` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ingest;
pub mod search;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build and query a semantic index over relational schema definitions.
#[derive(Parser)]
#[command(name = "smtc", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the pipeline configuration file.
    #[arg(long, global = true, default_value = "schemantic.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the catalog schema and rebuild the vector index.
    Ingest,

    /// Search indexed table definitions with a natural-language query.
    Search {
        /// The query text.
        query: String,

        /// Maximum number of tables to return.
        #[arg(short = 'k', long, default_value = "5")]
        limit: usize,
    },

    /// Show index location, entry count, and embedding model.
    Status,
}
