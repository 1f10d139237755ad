//! Deterministic rendering of catalog tables into schema documents.
//!
//! The rendered `CREATE TABLE` text is the retrievable unit, not executable
//! DDL: primary keys, constraints, and defaults are not captured. Identical
//! catalog state always renders identical content.

use schemantic_types::catalog::CatalogTable;
use schemantic_types::document::{DocumentMetadata, SchemaDocument};

/// Render a catalog table as a `CREATE TABLE` definition.
///
/// One line per column, in catalog order, each of the form
/// `  <name> <type> <NULL|NOT NULL>,` -- the trailing comma is kept on the
/// last column. Data types appear verbatim from the catalog.
pub fn render_create_table(table: &CatalogTable) -> String {
    let mut lines = Vec::with_capacity(table.columns.len() + 2);
    lines.push(format!("CREATE TABLE {} (", table.table.qualified()));
    for column in &table.columns {
        lines.push(format!(
            "  {} {} {},",
            column.name, column.data_type, column.nullability
        ));
    }
    lines.push(");".to_string());
    lines.join("\n")
}

/// Build the schema document for a catalog table: rendered content plus
/// table identity metadata.
pub fn document_for_table(table: &CatalogTable) -> SchemaDocument {
    SchemaDocument {
        content: render_create_table(table),
        metadata: DocumentMetadata {
            table_name: table.table.qualified(),
            namespace: table.table.namespace.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemantic_types::catalog::{ColumnDescriptor, Nullability, TableRef};

    fn orders_table() -> CatalogTable {
        CatalogTable {
            table: TableRef::new("Sales", "Orders"),
            columns: vec![
                ColumnDescriptor::new("id", "integer", Nullability::NotNull),
                ColumnDescriptor::new("name", "text", Nullability::Nullable),
            ],
        }
    }

    #[test]
    fn test_render_matches_canonical_form() {
        let rendered = render_create_table(&orders_table());
        assert_eq!(
            rendered,
            "CREATE TABLE Sales.Orders (\n  id integer NOT NULL,\n  name text NULL,\n);"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = orders_table();
        assert_eq!(render_create_table(&table), render_create_table(&table));
    }

    #[test]
    fn test_render_preserves_column_order() {
        let mut table = orders_table();
        table.columns.reverse();
        let rendered = render_create_table(&table);
        let name_pos = rendered.find("name text").unwrap();
        let id_pos = rendered.find("id integer").unwrap();
        assert!(name_pos < id_pos);
    }

    #[test]
    fn test_render_table_without_columns() {
        let table = CatalogTable {
            table: TableRef::new("Sales", "Empty"),
            columns: vec![],
        };
        assert_eq!(render_create_table(&table), "CREATE TABLE Sales.Empty (\n);");
    }

    #[test]
    fn test_render_keeps_catalog_type_names_verbatim() {
        let table = CatalogTable {
            table: TableRef::new("Person", "Address"),
            columns: vec![ColumnDescriptor::new(
                "ModifiedDate",
                "timestamp without time zone",
                Nullability::NotNull,
            )],
        };
        let rendered = render_create_table(&table);
        assert!(rendered.contains("  ModifiedDate timestamp without time zone NOT NULL,"));
    }

    #[test]
    fn test_document_metadata_uses_qualified_name() {
        let doc = document_for_table(&orders_table());
        assert_eq!(doc.metadata.table_name, "Sales.Orders");
        assert_eq!(doc.metadata.namespace, "Sales");
        assert!(doc.content.starts_with("CREATE TABLE Sales.Orders ("));
    }
}
