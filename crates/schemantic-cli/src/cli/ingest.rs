//! One-shot ingestion command.
//!
//! Runs the extract-then-build pipeline once and maps the tagged outcome to
//! an exit status: success when the index was rebuilt or the catalog was
//! genuinely empty, failure when the catalog could not be read (nothing was
//! indexed against a catalog whose state is unknown) or the build aborted.

use std::process::ExitCode;

use anyhow::Result;
use console::style;

use schemantic_core::pipeline::{IngestOutcome, IngestionPipeline};
use schemantic_infra::postgres::PgCatalogReader;
use schemantic_infra::vector::{FastEmbedder, LanceVectorIndex};
use schemantic_types::config::PipelineConfig;

/// Run the ingestion pipeline once.
pub async fn ingest(config: PipelineConfig, json: bool, quiet: bool) -> Result<ExitCode> {
    if !quiet && !json {
        println!();
        println!(
            "  {} Reading catalog '{}' on {}:{}",
            style("🔌").bold(),
            style(&config.catalog.database).cyan(),
            config.catalog.host,
            config.catalog.port
        );
    }

    let reader = PgCatalogReader::new(config.catalog.clone());
    let embedder = FastEmbedder::new()?;
    let index = LanceVectorIndex::open(config.index.path.clone()).await?;

    let pipeline = IngestionPipeline::new(reader, embedder, index);
    let outcome = pipeline.run().await?;

    match outcome {
        IngestOutcome::Indexed { documents } => {
            if json {
                let report = serde_json::json!({
                    "outcome": "indexed",
                    "documents": documents,
                    "index_path": config.index.path.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if !quiet {
                println!(
                    "  {} Indexed {} table definitions into '{}'",
                    style("✅").bold(),
                    style(documents).bold(),
                    config.index.path.display()
                );
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }

        IngestOutcome::NoTables => {
            if json {
                let report = serde_json::json!({ "outcome": "no_tables" });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if !quiet {
                println!(
                    "  {} No base tables in the allow-listed namespaces; existing index left untouched",
                    style("⚠️").bold()
                );
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }

        IngestOutcome::CatalogUnavailable { error } => {
            if json {
                let report = serde_json::json!({
                    "outcome": "catalog_unavailable",
                    "error": error.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                eprintln!(
                    "  {} Catalog unavailable, nothing indexed: {}",
                    style("❌").bold(),
                    error
                );
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
