//! The two-stage ingestion pipeline: extract, then build.
//!
//! The stages run strictly sequentially with no streaming overlap. The
//! pipeline never panics on a catalog outage -- extraction failures are
//! reported as a tagged outcome so callers can distinguish "the catalog is
//! empty" from "the catalog could not be read."

use schemantic_types::error::{CatalogError, IndexError};

use crate::build::{BuildOutcome, IndexBuilder};
use crate::catalog::CatalogReader;
use crate::embed::Embedder;
use crate::extract::SchemaExtractor;
use crate::index::VectorIndex;

/// Outcome of one pipeline run.
#[derive(Debug)]
pub enum IngestOutcome {
    /// The catalog could not be read. Nothing was indexed and the existing
    /// index was left untouched.
    CatalogUnavailable { error: CatalogError },
    /// The catalog was read but the allow-listed namespaces contained no
    /// base tables. The existing index was left untouched.
    NoTables,
    /// The index was rebuilt from this many schema documents.
    Indexed { documents: usize },
}

/// Runs schema extraction and index construction in sequence.
pub struct IngestionPipeline<R, E, S> {
    extractor: SchemaExtractor<R>,
    builder: IndexBuilder<E, S>,
}

impl<R: CatalogReader, E: Embedder, S: VectorIndex> IngestionPipeline<R, E, S> {
    pub fn new(reader: R, embedder: E, index: S) -> Self {
        Self {
            extractor: SchemaExtractor::new(reader),
            builder: IndexBuilder::new(embedder, index),
        }
    }

    /// Run the pipeline once.
    ///
    /// Catalog failures are contained here (logged, reported in the
    /// outcome); embedding and persistence failures abort the run with an
    /// `IndexError`.
    pub async fn run(&self) -> Result<IngestOutcome, IndexError> {
        let documents = match self.extractor.try_extract().await {
            Ok(documents) => documents,
            Err(error) => {
                tracing::warn!(error = %error, "catalog unavailable; nothing to index");
                return Ok(IngestOutcome::CatalogUnavailable { error });
            }
        };

        match self.builder.build(&documents).await? {
            BuildOutcome::SkippedEmpty => Ok(IngestOutcome::NoTables),
            BuildOutcome::Built { entries } => Ok(IngestOutcome::Indexed { documents: entries }),
        }
    }

    /// The vector index this pipeline writes to.
    pub fn index(&self) -> &S {
        self.builder.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeCatalog, HashEmbedder, MemoryIndex, sample_tables};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_run_indexes_catalog_tables() {
        let pipeline = IngestionPipeline::new(
            FakeCatalog::with_tables(sample_tables()),
            HashEmbedder::new(),
            MemoryIndex::new(),
        );

        let outcome = pipeline.run().await.unwrap();

        assert!(matches!(outcome, IngestOutcome::Indexed { documents: 2 }));
        assert_eq!(pipeline.index().entries().len(), 2);
    }

    #[tokio::test]
    async fn test_run_twice_yields_one_entry_per_document() {
        let pipeline = IngestionPipeline::new(
            FakeCatalog::with_tables(sample_tables()),
            HashEmbedder::new(),
            MemoryIndex::new(),
        );

        pipeline.run().await.unwrap();
        pipeline.run().await.unwrap();

        assert_eq!(pipeline.index().entries().len(), 2);
    }

    #[tokio::test]
    async fn test_catalog_failure_is_contained() {
        let pipeline = IngestionPipeline::new(
            FakeCatalog::failing(CatalogError::Connection("unreachable".to_string())),
            HashEmbedder::new(),
            MemoryIndex::new(),
        );

        let outcome = pipeline.run().await.unwrap();

        assert!(matches!(outcome, IngestOutcome::CatalogUnavailable { .. }));
        // The builder never ran, so no destructive reset happened.
        assert_eq!(pipeline.index().delete_all_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_catalog_reports_no_tables() {
        let pipeline = IngestionPipeline::new(
            FakeCatalog::with_tables(vec![]),
            HashEmbedder::new(),
            MemoryIndex::new(),
        );

        let outcome = pipeline.run().await.unwrap();

        assert!(matches!(outcome, IngestOutcome::NoTables));
        assert_eq!(pipeline.index().entries().len(), 0);
    }

    #[tokio::test]
    async fn test_embedding_failure_surfaces_index_error() {
        let pipeline = IngestionPipeline::new(
            FakeCatalog::with_tables(sample_tables()),
            HashEmbedder::failing(),
            MemoryIndex::new(),
        );

        let result = pipeline.run().await;

        assert!(matches!(result, Err(IndexError::Embedding(_))));
    }
}
