//! PostgreSQL `information_schema` catalog reader.
//!
//! Implements `CatalogReader` from `schemantic-core` using sqlx. Each
//! `snapshot` call opens a single connection, reads the allow-listed base
//! tables and their columns, and closes the connection before returning --
//! on the error path too. One attempt per call, no retries.

use sqlx::Row;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use schemantic_core::catalog::CatalogReader;
use schemantic_types::catalog::{CatalogTable, ColumnDescriptor, Nullability, TableRef};
use schemantic_types::config::CatalogConfig;
use schemantic_types::error::CatalogError;

/// Base tables in the allow-listed namespaces. The allow-list is bound as a
/// text array, so non-listed namespaces are excluded by query construction,
/// not by runtime filtering. `information_schema` row order is unspecified,
/// so the ordering is made explicit to keep extraction deterministic.
const TABLES_QUERY: &str = "\
    SELECT table_schema, table_name \
    FROM information_schema.tables \
    WHERE table_schema = ANY($1) AND table_type = 'BASE TABLE' \
    ORDER BY table_schema, table_name";

/// Columns of one table, in catalog-defined order.
const COLUMNS_QUERY: &str = "\
    SELECT column_name, data_type, is_nullable \
    FROM information_schema.columns \
    WHERE table_schema = $1 AND table_name = $2 \
    ORDER BY ordinal_position";

/// PostgreSQL-backed implementation of `CatalogReader`.
///
/// Holds only the connection descriptor; the connection itself lives for
/// the duration of one `snapshot` call.
pub struct PgCatalogReader {
    config: CatalogConfig,
}

impl PgCatalogReader {
    /// Create a reader for the given catalog connection descriptor.
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
    }

    async fn connect(&self) -> Result<PgPool, CatalogError> {
        PgPoolOptions::new()
            .max_connections(1)
            .connect_with(self.connect_options())
            .await
            .map_err(|e| CatalogError::Connection(e.to_string()))
    }

    async fn fetch_tables(
        pool: &PgPool,
        namespaces: &[String],
    ) -> Result<Vec<TableRef>, CatalogError> {
        let rows = sqlx::query(TABLES_QUERY)
            .bind(namespaces)
            .fetch_all(pool)
            .await
            .map_err(|e| CatalogError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let namespace: String = row
                    .try_get("table_schema")
                    .map_err(|e| CatalogError::Query(e.to_string()))?;
                let name: String = row
                    .try_get("table_name")
                    .map_err(|e| CatalogError::Query(e.to_string()))?;
                Ok(TableRef::new(namespace, name))
            })
            .collect()
    }

    async fn fetch_columns(
        pool: &PgPool,
        table: &TableRef,
    ) -> Result<Vec<ColumnDescriptor>, CatalogError> {
        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(&table.namespace)
            .bind(&table.name)
            .fetch_all(pool)
            .await
            .map_err(|e| CatalogError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let name: String = row
                    .try_get("column_name")
                    .map_err(|e| CatalogError::Query(e.to_string()))?;
                let data_type: String = row
                    .try_get("data_type")
                    .map_err(|e| CatalogError::Query(e.to_string()))?;
                let is_nullable: String = row
                    .try_get("is_nullable")
                    .map_err(|e| CatalogError::Query(e.to_string()))?;
                Ok(column_from_catalog(name, data_type, &is_nullable))
            })
            .collect()
    }

    async fn read_catalog(
        pool: &PgPool,
        namespaces: &[String],
    ) -> Result<Vec<CatalogTable>, CatalogError> {
        let tables = Self::fetch_tables(pool, namespaces).await?;
        tracing::info!(
            tables = tables.len(),
            "found base tables in allow-listed namespaces"
        );

        let mut catalog = Vec::with_capacity(tables.len());
        for table in tables {
            let columns = Self::fetch_columns(pool, &table).await?;
            catalog.push(CatalogTable { table, columns });
        }
        Ok(catalog)
    }
}

/// Map one `information_schema.columns` row to a column descriptor.
///
/// The data type string is kept verbatim; nullability follows the catalog's
/// `is_nullable` convention (`YES` means nullable).
fn column_from_catalog(name: String, data_type: String, is_nullable: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        name,
        data_type,
        nullability: Nullability::from_catalog(is_nullable),
    }
}

impl CatalogReader for PgCatalogReader {
    async fn snapshot(&self) -> Result<Vec<CatalogTable>, CatalogError> {
        tracing::debug!(
            host = %self.config.host,
            database = %self.config.database,
            "connecting to catalog"
        );

        let pool = self.connect().await?;
        let result = Self::read_catalog(&pool, &self.config.namespaces).await;

        // Release the connection on both paths before surfacing the result.
        pool.close().await;

        result
    }
}
