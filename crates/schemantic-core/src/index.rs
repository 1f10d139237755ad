//! Vector index store trait.
//!
//! Defines the interface for the persisted vector index over schema
//! documents. Implementations (e.g., LanceDB) live in schemantic-infra.

use schemantic_types::document::{IndexEntry, ScoredEntry};
use schemantic_types::error::IndexError;

/// Trait for a persisted vector index supporting destructive rebuild and
/// similarity search.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in schemantic-infra.
pub trait VectorIndex: Send + Sync {
    /// Persist a fresh index containing exactly the given entries.
    ///
    /// Callers are expected to `delete_all` first; `create` does not merge
    /// with existing entries.
    fn create(
        &self,
        entries: Vec<IndexEntry>,
    ) -> impl std::future::Future<Output = Result<(), IndexError>> + Send;

    /// Delete the entire index. Idempotent: succeeds when no index exists.
    fn delete_all(&self) -> impl std::future::Future<Output = Result<(), IndexError>> + Send;

    /// Number of persisted entries (0 when no index exists).
    fn count(&self) -> impl std::future::Future<Output = Result<u64, IndexError>> + Send;

    /// Return the `k` entries closest to `vector` by cosine distance,
    /// closest first. Used by downstream consumers, not by the build itself.
    fn similarity_query(
        &self,
        vector: &[f32],
        k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<ScoredEntry>, IndexError>> + Send;
}
