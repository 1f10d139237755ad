//! Index status command.

use anyhow::Result;
use console::style;

use schemantic_core::index::VectorIndex;
use schemantic_infra::vector::LanceVectorIndex;
use schemantic_infra::vector::embedder::MODEL_NAME;
use schemantic_types::config::PipelineConfig;

/// Display index location, entry count, and the embedding model in use.
pub async fn status(config: PipelineConfig, json: bool) -> Result<()> {
    let index = LanceVectorIndex::open(config.index.path.clone()).await?;
    let entries = index.count().await?;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "index_path": config.index.path.display().to_string(),
            "entries": entries,
            "embedding_model": MODEL_NAME,
            "namespaces": config.catalog.namespaces,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Schemantic v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  Index path:  {}", style(config.index.path.display()).bold());
    println!("  Entries:     {}", style(entries).bold());
    println!("  Model:       {}", style(MODEL_NAME).dim());
    println!(
        "  Namespaces:  {}",
        style(config.catalog.namespaces.join(", ")).dim()
    );
    println!();

    Ok(())
}
