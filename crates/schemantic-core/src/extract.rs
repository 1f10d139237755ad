//! Schema extraction: catalog snapshot to schema documents.
//!
//! The extractor reads the catalog once per invocation and renders one
//! document per table. A catalog failure degrades to an empty document set
//! (logged, never propagated as a panic) -- callers must treat an empty
//! result as "nothing to index," not as a hard failure signal.

use schemantic_types::document::SchemaDocument;
use schemantic_types::error::CatalogError;

use crate::catalog::CatalogReader;
use crate::render::document_for_table;

/// Renders the allow-listed portion of a relational catalog into schema
/// documents.
pub struct SchemaExtractor<R> {
    reader: R,
}

impl<R: CatalogReader> SchemaExtractor<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Extract schema documents, surfacing the catalog error to the caller.
    ///
    /// Document order follows the catalog snapshot, so a fixed catalog state
    /// yields an identical sequence on every call.
    pub async fn try_extract(&self) -> Result<Vec<SchemaDocument>, CatalogError> {
        let tables = self.reader.snapshot().await?;
        tracing::debug!(tables = tables.len(), "rendering catalog tables into documents");
        Ok(tables.iter().map(document_for_table).collect())
    }

    /// Extract schema documents, failing open on catalog errors.
    ///
    /// Any connection or query failure is logged and collapsed into an empty
    /// document set so a transient catalog outage cannot crash the process.
    pub async fn extract(&self) -> Vec<SchemaDocument> {
        match self.try_extract().await {
            Ok(documents) => documents,
            Err(err) => {
                tracing::warn!(error = %err, "catalog read failed; continuing with empty document set");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeCatalog, sample_tables};
    use schemantic_types::error::CatalogError;

    #[tokio::test]
    async fn test_extract_renders_one_document_per_table() {
        let extractor = SchemaExtractor::new(FakeCatalog::with_tables(sample_tables()));

        let documents = extractor.extract().await;

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].metadata.table_name, "Sales.Orders");
        assert_eq!(
            documents[0].content,
            "CREATE TABLE Sales.Orders (\n  id integer NOT NULL,\n  name text NULL,\n);"
        );
        assert_eq!(documents[1].metadata.table_name, "Sales.Customers");
    }

    #[tokio::test]
    async fn test_extract_is_deterministic_for_fixed_catalog() {
        let extractor = SchemaExtractor::new(FakeCatalog::with_tables(sample_tables()));

        let first = extractor.extract().await;
        let second = extractor.extract().await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_extract_fails_open_on_connection_error() {
        let extractor = SchemaExtractor::new(FakeCatalog::failing(CatalogError::Connection(
            "connection refused".to_string(),
        )));

        let documents = extractor.extract().await;

        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_try_extract_surfaces_query_error() {
        let extractor = SchemaExtractor::new(FakeCatalog::failing(CatalogError::Query(
            "column does not exist".to_string(),
        )));

        let result = extractor.try_extract().await;

        assert!(matches!(result, Err(CatalogError::Query(_))));
    }

    #[tokio::test]
    async fn test_extract_empty_catalog_yields_empty_documents() {
        let extractor = SchemaExtractor::new(FakeCatalog::with_tables(vec![]));

        let documents = extractor.extract().await;

        assert!(documents.is_empty());
    }
}
