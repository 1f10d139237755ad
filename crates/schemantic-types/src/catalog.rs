//! Catalog-side domain types: table identities, columns, nullability.
//!
//! These mirror what the relational catalog exposes. The catalog is the
//! source of truth and is never mutated by this system; everything here is
//! read-once data carried through the pipeline.

use serde::{Deserialize, Serialize};

/// Identity of a table in the catalog: logical namespace plus table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Logical namespace (a "schema" in SQL terminology).
    pub namespace: String,
    /// Table name within the namespace.
    pub name: String,
}

impl TableRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Fully qualified identifier, `<namespace>.<name>`.
    ///
    /// This exact form is used both in rendered documents and as the
    /// `table_name` metadata key of persisted index entries.
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Column nullability as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nullability {
    Nullable,
    NotNull,
}

impl Nullability {
    /// Map the catalog's `is_nullable` column to a nullability flag.
    ///
    /// The catalog reports the literal string `YES` for nullable columns;
    /// any other value is treated as `NOT NULL`.
    pub fn from_catalog(is_nullable: &str) -> Self {
        if is_nullable == "YES" {
            Self::Nullable
        } else {
            Self::NotNull
        }
    }
}

impl std::fmt::Display for Nullability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nullable => write!(f, "NULL"),
            Self::NotNull => write!(f, "NOT NULL"),
        }
    }
}

/// One column of a catalog table.
///
/// The data type is carried verbatim from the catalog's native type names --
/// no normalization into a canonical type vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
    pub nullability: Nullability,
}

impl ColumnDescriptor {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        nullability: Nullability,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullability,
        }
    }
}

/// A table as read from the catalog: identity plus columns in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTable {
    pub table: TableRef,
    /// Columns in the order the catalog returned them (`ordinal_position`).
    pub columns: Vec<ColumnDescriptor>,
}
