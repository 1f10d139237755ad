//! LanceDB-backed vector index over schema documents.
//!
//! Implements `VectorIndex` from `schemantic-core`. The whole index is one
//! LanceDB table; `delete_all` drops it and `create` writes a fresh one, so
//! a rebuild replaces every entry. Similarity search uses cosine distance.

use std::sync::Arc;

use arrow_array::{
    Array, FixedSizeListArray, Float32Array, RecordBatch, RecordBatchIterator, StringArray,
};
use arrow_schema::{DataType, Field};
use futures_util::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};

use schemantic_core::index::VectorIndex;
use schemantic_types::document::{DocumentMetadata, IndexEntry, ScoredEntry};
use schemantic_types::error::IndexError;

use super::lance::LanceVectorStore;
use super::schema::{EMBEDDING_DIMENSION, table_schemas_schema};

/// LanceDB-backed implementation of `VectorIndex`.
///
/// The index directory must not be shared with a concurrent build: the
/// drop-then-create rebuild assumes this process is the only writer.
pub struct LanceVectorIndex {
    store: LanceVectorStore,
}

impl LanceVectorIndex {
    /// Open (or create) the vector store at the given path.
    pub async fn open(path: std::path::PathBuf) -> Result<Self, IndexError> {
        let store = LanceVectorStore::new(path)
            .await
            .map_err(|e| IndexError::Store(format!("failed to open vector store: {e}")))?;
        Ok(Self { store })
    }

    /// Build one Arrow RecordBatch holding every index entry.
    fn build_record_batch(entries: &[IndexEntry]) -> Result<RecordBatch, IndexError> {
        let schema = Arc::new(table_schemas_schema());

        let table_name_array =
            StringArray::from_iter_values(entries.iter().map(|e| e.metadata.table_name.as_str()));
        let namespace_array =
            StringArray::from_iter_values(entries.iter().map(|e| e.metadata.namespace.as_str()));
        let content_array =
            StringArray::from_iter_values(entries.iter().map(|e| e.content.as_str()));
        let model_array =
            StringArray::from_iter_values(entries.iter().map(|e| e.embedding_model.as_str()));

        let mut values = Vec::with_capacity(entries.len() * EMBEDDING_DIMENSION as usize);
        for entry in entries {
            if entry.vector.len() != EMBEDDING_DIMENSION as usize {
                return Err(IndexError::Store(format!(
                    "entry '{}' has a {}-dimensional vector, expected {}",
                    entry.metadata.table_name,
                    entry.vector.len(),
                    EMBEDDING_DIMENSION
                )));
            }
            values.extend_from_slice(&entry.vector);
        }
        let field = Arc::new(Field::new("item", DataType::Float32, true));
        let vector_array = FixedSizeListArray::new(
            field,
            EMBEDDING_DIMENSION,
            Arc::new(Float32Array::from(values)),
            None,
        );

        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(table_name_array),
                Arc::new(namespace_array),
                Arc::new(content_array),
                Arc::new(model_array),
                Arc::new(vector_array),
            ],
        )
        .map_err(|e| IndexError::Store(format!("failed to build record batch: {e}")))
    }

    /// Parse similarity-search result rows into scored entries.
    ///
    /// Reads the `_distance` column LanceDB appends to vector-search
    /// results; rows without it get distance 0.0.
    fn record_batch_to_scored(batch: &RecordBatch) -> Vec<ScoredEntry> {
        let num_rows = batch.num_rows();
        if num_rows == 0 {
            return vec![];
        }

        let table_name_col = batch
            .column_by_name("table_name")
            .and_then(|c| c.as_any().downcast_ref::<StringArray>())
            .expect("table_name column should be StringArray");
        let namespace_col = batch
            .column_by_name("namespace")
            .and_then(|c| c.as_any().downcast_ref::<StringArray>())
            .expect("namespace column should be StringArray");
        let content_col = batch
            .column_by_name("content")
            .and_then(|c| c.as_any().downcast_ref::<StringArray>())
            .expect("content column should be StringArray");
        let distance_col = batch
            .column_by_name("_distance")
            .and_then(|c| c.as_any().downcast_ref::<Float32Array>());

        let mut scored = Vec::with_capacity(num_rows);
        for i in 0..num_rows {
            scored.push(ScoredEntry {
                content: content_col.value(i).to_string(),
                metadata: DocumentMetadata {
                    table_name: table_name_col.value(i).to_string(),
                    namespace: namespace_col.value(i).to_string(),
                },
                distance: distance_col.map_or(0.0, |d| d.value(i)),
            });
        }
        scored
    }
}

impl VectorIndex for LanceVectorIndex {
    async fn create(&self, entries: Vec<IndexEntry>) -> Result<(), IndexError> {
        let table = self
            .store
            .ensure_table(
                LanceVectorStore::schemas_table_name(),
                Arc::new(table_schemas_schema()),
            )
            .await
            .map_err(|e| IndexError::Store(format!("failed to create index table: {e}")))?;

        let batch = Self::build_record_batch(&entries)?;
        let schema = batch.schema();
        let reader = RecordBatchIterator::new(vec![Ok(batch)], schema);

        table
            .add(reader)
            .execute()
            .await
            .map_err(|e| IndexError::Store(format!("failed to write index entries: {e}")))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), IndexError> {
        self.store
            .drop_table(LanceVectorStore::schemas_table_name())
            .await
            .map_err(|e| IndexError::Store(format!("failed to drop index table: {e}")))
    }

    async fn count(&self) -> Result<u64, IndexError> {
        let table_name = LanceVectorStore::schemas_table_name();
        if !self.store.table_exists(table_name).await {
            return Ok(0);
        }

        let table = self
            .store
            .ensure_table(table_name, Arc::new(table_schemas_schema()))
            .await
            .map_err(|e| IndexError::Store(format!("failed to open index table: {e}")))?;

        let count = table
            .count_rows(None)
            .await
            .map_err(|e| IndexError::Store(format!("failed to count index entries: {e}")))?;

        Ok(count as u64)
    }

    async fn similarity_query(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<ScoredEntry>, IndexError> {
        let table_name = LanceVectorStore::schemas_table_name();
        if !self.store.table_exists(table_name).await {
            return Ok(vec![]);
        }

        let table = self
            .store
            .ensure_table(table_name, Arc::new(table_schemas_schema()))
            .await
            .map_err(|e| IndexError::Store(format!("failed to open index table: {e}")))?;

        let results = table
            .vector_search(vector)
            .map_err(|e| IndexError::Store(format!("vector search setup failed: {e}")))?
            .distance_type(lancedb::DistanceType::Cosine)
            .limit(k)
            .execute()
            .await
            .map_err(|e| IndexError::Store(format!("vector search failed: {e}")))?;

        let batches: Vec<RecordBatch> = results
            .try_collect()
            .await
            .map_err(|e| IndexError::Store(format!("failed to collect search results: {e}")))?;

        let mut scored: Vec<ScoredEntry> = batches
            .iter()
            .flat_map(Self::record_batch_to_scored)
            .collect();
        scored.truncate(k);

        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic 384-dim unit vector with a single non-zero axis.
    fn basis_vector(axis: usize) -> Vec<f32> {
        let mut v = vec![0.0f32; EMBEDDING_DIMENSION as usize];
        v[axis] = 1.0;
        v
    }

    fn entry(table_name: &str, namespace: &str, axis: usize) -> IndexEntry {
        IndexEntry {
            vector: basis_vector(axis),
            content: format!("CREATE TABLE {table_name} (\n);"),
            metadata: DocumentMetadata {
                table_name: table_name.to_string(),
                namespace: namespace.to_string(),
            },
            embedding_model: "test-model".to_string(),
        }
    }

    async fn open_index() -> (tempfile::TempDir, LanceVectorIndex) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let index = LanceVectorIndex::open(temp_dir.path().to_path_buf())
            .await
            .expect("Failed to open index");
        (temp_dir, index)
    }

    #[tokio::test]
    async fn test_create_persists_entries() {
        let (_tmp, index) = open_index().await;

        index
            .create(vec![
                entry("Sales.Orders", "Sales", 0),
                entry("Person.Address", "Person", 1),
            ])
            .await
            .unwrap();

        assert_eq!(index.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_count_is_zero_without_index() {
        let (_tmp, index) = open_index().await;
        assert_eq!(index.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_all_is_idempotent() {
        let (_tmp, index) = open_index().await;

        // Deleting a non-existent index succeeds
        index.delete_all().await.unwrap();

        index.create(vec![entry("Sales.Orders", "Sales", 0)]).await.unwrap();
        index.delete_all().await.unwrap();
        assert_eq!(index.count().await.unwrap(), 0);

        index.delete_all().await.unwrap();
    }

    #[tokio::test]
    async fn test_rebuild_replaces_entries() {
        let (_tmp, index) = open_index().await;

        index
            .create(vec![
                entry("Sales.Orders", "Sales", 0),
                entry("Person.Address", "Person", 1),
            ])
            .await
            .unwrap();

        // Same delete-then-create sequence the builder runs
        index.delete_all().await.unwrap();
        index
            .create(vec![
                entry("Sales.Orders", "Sales", 0),
                entry("Person.Address", "Person", 1),
            ])
            .await
            .unwrap();

        assert_eq!(index.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_similarity_query_returns_closest_first() {
        let (_tmp, index) = open_index().await;

        index
            .create(vec![
                entry("Sales.Orders", "Sales", 0),
                entry("Person.Address", "Person", 1),
                entry("Production.Product", "Production", 2),
            ])
            .await
            .unwrap();

        let hits = index.similarity_query(&basis_vector(1), 2).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].metadata.table_name, "Person.Address");
        assert_eq!(hits[0].metadata.namespace, "Person");
        assert!(hits[0].distance < hits[1].distance);
    }

    #[tokio::test]
    async fn test_similarity_query_without_index_is_empty() {
        let (_tmp, index) = open_index().await;
        let hits = index.similarity_query(&basis_vector(0), 5).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_wrong_dimension() {
        let (_tmp, index) = open_index().await;

        let bad = IndexEntry {
            vector: vec![1.0, 2.0],
            content: String::new(),
            metadata: DocumentMetadata {
                table_name: "Sales.Orders".to_string(),
                namespace: "Sales".to_string(),
            },
            embedding_model: "test-model".to_string(),
        };

        let result = index.create(vec![bad]).await;
        assert!(matches!(result, Err(IndexError::Store(_))));
    }
}
