//! Semantic search over indexed table definitions.
//!
//! Embeds the query with the same model used at build time and runs a
//! cosine similarity search against the persisted index. This is the
//! downstream-consumer surface; it never writes to the index.

use anyhow::Result;
use comfy_table::{Table, presets};
use console::style;

use schemantic_core::embed::Embedder;
use schemantic_core::index::VectorIndex;
use schemantic_infra::vector::{FastEmbedder, LanceVectorIndex};
use schemantic_types::config::PipelineConfig;

/// Search the index for the `limit` table definitions closest to `query`.
pub async fn search(config: PipelineConfig, query: &str, limit: usize, json: bool) -> Result<()> {
    let embedder = FastEmbedder::new()?;
    let index = LanceVectorIndex::open(config.index.path.clone()).await?;

    let mut vectors = embedder.embed(&[query.to_string()]).await?;
    let vector = vectors
        .pop()
        .ok_or_else(|| anyhow::anyhow!("embedder returned no vector for the query"))?;

    let hits = index.similarity_query(&vector, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!();
        println!(
            "  {} No matches. Is the index built? Run {} first.",
            style("⚠️").bold(),
            style("smtc ingest").cyan()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Table", "Namespace", "Distance"]);
    for hit in &hits {
        table.add_row(vec![
            hit.metadata.table_name.clone(),
            hit.metadata.namespace.clone(),
            format!("{:.4}", hit.distance),
        ]);
    }

    println!();
    println!(
        "  {} {} match(es) for '{}'",
        style("🔍").bold(),
        style(hits.len()).bold(),
        style(query).cyan()
    );
    println!();
    println!("{table}");

    for hit in &hits {
        println!();
        println!(
            "  {}",
            style(&hit.metadata.table_name).cyan().bold()
        );
        for line in hit.content.lines() {
            println!("  {}", style(line).dim());
        }
    }
    println!();

    Ok(())
}
