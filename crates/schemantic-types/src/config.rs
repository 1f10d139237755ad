//! Pipeline configuration.
//!
//! `PipelineConfig` is the top-level structure loaded from `schemantic.toml`.
//! All fields have defaults matching a local development setup, so an empty
//! or missing file yields a working configuration. The structure is passed
//! explicitly into each component at construction -- there is no module-level
//! configuration state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the ingestion pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Catalog connection and namespace allow-list.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Vector index storage location.
    #[serde(default)]
    pub index: IndexConfig,
}

/// Connection descriptor for the relational catalog, plus the namespace
/// allow-list to scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    #[serde(default = "default_database")]
    pub database: String,

    /// Namespaces whose base tables are extracted. System and internal
    /// namespaces are excluded by not being listed here -- there is no
    /// runtime filtering beyond this allow-list.
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
}

/// Storage location for the persisted vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Filesystem path of the vector store. The directory is exclusively
    /// owned by the pipeline during a build.
    #[serde(default = "default_index_path")]
    pub path: PathBuf,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_database() -> String {
    "postgres".to_string()
}

fn default_namespaces() -> Vec<String> {
    ["Person", "Sales", "Production", "Purchasing", "HumanResources"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_index_path() -> PathBuf {
    PathBuf::from("./schema_index")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
            database: default_database(),
            namespaces: default_namespaces(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: default_index_path(),
        }
    }
}
