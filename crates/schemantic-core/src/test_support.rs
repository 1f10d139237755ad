//! In-process fakes for the catalog, embedder, and vector index traits.
//!
//! Used by the extract/build/pipeline tests to exercise the pipeline logic
//! without a database, a model runtime, or an on-disk store.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use schemantic_types::catalog::{CatalogTable, ColumnDescriptor, Nullability, TableRef};
use schemantic_types::document::{IndexEntry, ScoredEntry};
use schemantic_types::error::{CatalogError, IndexError};

use crate::catalog::CatalogReader;
use crate::embed::Embedder;
use crate::index::VectorIndex;

/// Fixed catalog snapshot, or a canned error.
pub(crate) struct FakeCatalog {
    result: Result<Vec<CatalogTable>, CatalogError>,
}

impl FakeCatalog {
    pub(crate) fn with_tables(tables: Vec<CatalogTable>) -> Self {
        Self { result: Ok(tables) }
    }

    pub(crate) fn failing(error: CatalogError) -> Self {
        Self { result: Err(error) }
    }
}

impl CatalogReader for FakeCatalog {
    async fn snapshot(&self) -> Result<Vec<CatalogTable>, CatalogError> {
        match &self.result {
            Ok(tables) => Ok(tables.clone()),
            Err(CatalogError::Connection(msg)) => Err(CatalogError::Connection(msg.clone())),
            Err(CatalogError::Query(msg)) => Err(CatalogError::Query(msg.clone())),
        }
    }
}

/// Deterministic embedder: hashes each text into a small fixed-length vector.
pub(crate) struct HashEmbedder {
    pub(crate) fail: bool,
}

impl HashEmbedder {
    pub(crate) fn new() -> Self {
        Self { fail: false }
    }

    pub(crate) fn failing() -> Self {
        Self { fail: true }
    }
}

pub(crate) const FAKE_DIMENSION: usize = 8;

impl Embedder for HashEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, IndexError> {
        if self.fail {
            return Err(IndexError::Embedding("simulated embedding failure".to_string()));
        }
        Ok(texts
            .iter()
            .map(|text| {
                let mut vector = vec![0.0f32; FAKE_DIMENSION];
                for (i, byte) in text.bytes().enumerate() {
                    vector[i % FAKE_DIMENSION] += f32::from(byte);
                }
                vector
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        "fake-hash-embedder"
    }

    fn dimension(&self) -> usize {
        FAKE_DIMENSION
    }
}

/// In-memory vector index recording every lifecycle call.
#[derive(Default)]
pub(crate) struct MemoryIndex {
    pub(crate) entries: Mutex<Vec<IndexEntry>>,
    pub(crate) delete_all_calls: AtomicUsize,
    pub(crate) create_calls: AtomicUsize,
}

impl MemoryIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entries(&self) -> Vec<IndexEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl VectorIndex for MemoryIndex {
    async fn create(&self, entries: Vec<IndexEntry>) -> Result<(), IndexError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.entries.lock().unwrap() = entries;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), IndexError> {
        self.delete_all_calls.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, IndexError> {
        Ok(self.entries.lock().unwrap().len() as u64)
    }

    async fn similarity_query(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<ScoredEntry>, IndexError> {
        let mut scored: Vec<ScoredEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| ScoredEntry {
                content: entry.content.clone(),
                metadata: entry.metadata.clone(),
                distance: cosine_distance(&entry.vector, vector),
            })
            .collect();
        scored.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());
        scored.truncate(k);
        Ok(scored)
    }
}

fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b)
}

/// Two-table catalog fixture in the `Sales` namespace.
pub(crate) fn sample_tables() -> Vec<CatalogTable> {
    vec![
        CatalogTable {
            table: TableRef::new("Sales", "Orders"),
            columns: vec![
                ColumnDescriptor::new("id", "integer", Nullability::NotNull),
                ColumnDescriptor::new("name", "text", Nullability::Nullable),
            ],
        },
        CatalogTable {
            table: TableRef::new("Sales", "Customers"),
            columns: vec![
                ColumnDescriptor::new("customer_id", "integer", Nullability::NotNull),
                ColumnDescriptor::new("email", "character varying", Nullability::Nullable),
            ],
        },
    ]
}
