//! Pipeline configuration loader.
//!
//! Reads `schemantic.toml` and deserializes it into [`PipelineConfig`].
//! Falls back to defaults when the file is missing or malformed, so the
//! pipeline can run against a local development database with no config
//! file at all.

use std::path::Path;

use schemantic_types::config::PipelineConfig;

/// Load pipeline configuration from a TOML file.
///
/// - If the file does not exist, returns [`PipelineConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> PipelineConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return PipelineConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return PipelineConfig::default();
        }
    };

    match toml::from_str::<PipelineConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            PipelineConfig::default()
        }
    }
}
