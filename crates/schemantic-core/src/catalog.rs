//! Catalog reader trait.
//!
//! Defines the interface for reading table and column definitions from a
//! relational catalog. Implementations (e.g., PostgreSQL `information_schema`)
//! live in schemantic-infra.

use schemantic_types::catalog::CatalogTable;
use schemantic_types::error::CatalogError;

/// Trait for reading a snapshot of the relational catalog.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in schemantic-infra.
pub trait CatalogReader: Send + Sync {
    /// Read every base table in the configured namespace allow-list, with
    /// columns in catalog-defined order.
    ///
    /// One call is one scoped catalog session: the implementation acquires
    /// its connection when called and releases it before returning, on both
    /// the success and the error path. A single attempt, no retries.
    fn snapshot(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CatalogTable>, CatalogError>> + Send;
}
