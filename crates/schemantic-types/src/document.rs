//! Schema documents and index entries.
//!
//! A `SchemaDocument` is the retrievable unit: one rendered `CREATE TABLE`
//! text per catalog table, with enough metadata to identify the table it
//! came from. An `IndexEntry` is the persisted form, pairing the document
//! with its embedding vector.

use serde::{Deserialize, Serialize};

/// Structured metadata attached to a schema document and its index entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Fully qualified table identifier, `<namespace>.<table>`, exactly as
    /// enumerated by the catalog (no truncation or reformatting).
    pub table_name: String,
    /// The table's namespace, carried separately for filtering.
    pub namespace: String,
}

/// One rendered schema-definition document, derived from a catalog table.
///
/// `content` is a deterministic rendering: identical catalog state always
/// produces identical content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub content: String,
    pub metadata: DocumentMetadata,
}

/// A persisted index record: embedding vector, source content, metadata.
///
/// Created only by the index builder. The entire entry set is replaced on
/// each build; there are no partial updates and no versioning across builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub vector: Vec<f32>,
    pub content: String,
    pub metadata: DocumentMetadata,
    /// Name of the model that produced `vector`.
    pub embedding_model: String,
}

/// One similarity-search result: a stored document plus its cosine distance
/// from the query vector (lower is closer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub content: String,
    pub metadata: DocumentMetadata,
    pub distance: f32,
}
