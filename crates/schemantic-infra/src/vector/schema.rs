//! Arrow schema definition for the LanceDB schema-document table.
//!
//! A single table holds every index entry: one row per catalog table, with
//! a 384-dimensional float32 vector field for AllMiniLML6V2 embeddings.
//!
//! Arrow versions MUST match lancedb's transitive dependency (57.3 for
//! lancedb 0.26).

use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};

/// AllMiniLML6V2 embedding dimension.
pub const EMBEDDING_DIMENSION: i32 = 384;

/// Schema for the schema-document table in LanceDB.
///
/// Stores rendered `CREATE TABLE` documents with their table identity
/// metadata and embedding vectors for semantic search.
pub fn table_schemas_schema() -> Schema {
    Schema::new(vec![
        Field::new("table_name", DataType::Utf8, false),
        Field::new("namespace", DataType::Utf8, false),
        Field::new("content", DataType::Utf8, false),
        Field::new("embedding_model", DataType::Utf8, false),
        Field::new(
            "vector",
            DataType::FixedSizeList(
                Arc::new(Field::new("item", DataType::Float32, true)),
                EMBEDDING_DIMENSION,
            ),
            false,
        ),
    ])
}
