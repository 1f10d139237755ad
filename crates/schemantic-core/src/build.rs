//! Index construction with idempotent rebuild semantics.
//!
//! A build replaces the whole index: delete the existing one, embed every
//! document, persist a fresh entry set. Running the build twice on the same
//! documents yields an equivalent index -- no duplicates, no stale entries
//! from renamed or dropped tables.
//!
//! The reset happens before embedding, so a failed build leaves no index
//! rather than a stale one. Only one build may run against a given storage
//! location at a time; the index directory is exclusively owned by the
//! pipeline for the duration of a build.

use schemantic_types::document::{IndexEntry, SchemaDocument};
use schemantic_types::error::IndexError;

use crate::embed::Embedder;
use crate::index::VectorIndex;

/// Result of one build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No documents were supplied; the existing index was left untouched.
    SkippedEmpty,
    /// The index was rebuilt with this many entries.
    Built { entries: usize },
}

/// Builds the persisted vector index from a set of schema documents.
pub struct IndexBuilder<E, S> {
    embedder: E,
    index: S,
}

impl<E: Embedder, S: VectorIndex> IndexBuilder<E, S> {
    pub fn new(embedder: E, index: S) -> Self {
        Self { embedder, index }
    }

    /// Rebuild the index from `documents`.
    ///
    /// An empty input is a logged no-op: the prior index is not deleted.
    /// Otherwise the existing index is deleted first, then every document
    /// content is embedded and persisted as one entry. Any embedding or
    /// persistence failure aborts the build after the delete, leaving no
    /// index behind.
    pub async fn build(&self, documents: &[SchemaDocument]) -> Result<BuildOutcome, IndexError> {
        if documents.is_empty() {
            tracing::info!("no documents to index; leaving existing index untouched");
            return Ok(BuildOutcome::SkippedEmpty);
        }

        tracing::info!(
            documents = documents.len(),
            model = self.embedder.model_name(),
            "rebuilding schema index"
        );

        self.index.delete_all().await?;

        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let vectors = self.embedder.embed(&texts).await?;

        if vectors.len() != documents.len() {
            return Err(IndexError::Embedding(format!(
                "embedder returned {} vectors for {} documents",
                vectors.len(),
                documents.len()
            )));
        }

        let entries: Vec<IndexEntry> = documents
            .iter()
            .zip(vectors)
            .map(|(document, vector)| IndexEntry {
                vector,
                content: document.content.clone(),
                metadata: document.metadata.clone(),
                embedding_model: self.embedder.model_name().to_string(),
            })
            .collect();

        let count = entries.len();
        self.index.create(entries).await?;

        tracing::info!(entries = count, "schema index rebuilt");
        Ok(BuildOutcome::Built { entries: count })
    }

    /// The vector index this builder writes to.
    pub fn index(&self) -> &S {
        &self.index
    }
}
