//! PostgreSQL catalog access via `information_schema`.

pub mod catalog;

pub use catalog::PgCatalogReader;
