//! FastEmbed-based local embedding generator.
//!
//! Implements the `Embedder` trait from `schemantic-core` using fastembed's
//! AllMiniLML6V2 model (384 dimensions) with ONNX runtime inference. The
//! model weights are fetched once into the local cache; inference itself
//! needs no network access.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use schemantic_core::embed::Embedder;
use schemantic_types::error::IndexError;

use super::schema::EMBEDDING_DIMENSION;

/// Fixed model identifier reported on every index entry.
pub const MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Local sentence-embedding model.
///
/// Stateless across calls: identical input text yields identical vectors,
/// up to floating-point reproducibility.
pub struct FastEmbedder {
    model: TextEmbedding,
}

impl FastEmbedder {
    /// Load the AllMiniLML6V2 model from the local cache, downloading the
    /// weights on first use.
    pub fn new() -> Result<Self, IndexError> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .map_err(|e| IndexError::Embedding(format!("failed to load embedding model: {e}")))?;

        Ok(Self { model })
    }
}

impl Embedder for FastEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, IndexError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| IndexError::Embedding(e.to_string()))
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fetches the model weights on first run, so excluded from the default
    // test pass. Run with `cargo test -- --ignored` when the cache is warm.
    #[tokio::test]
    #[ignore]
    async fn test_embed_returns_fixed_length_vectors() {
        let embedder = FastEmbedder::new().unwrap();

        let texts = vec![
            "CREATE TABLE Sales.Orders (\n  id integer NOT NULL,\n);".to_string(),
            "CREATE TABLE Person.Address (\n  city text NULL,\n);".to_string(),
        ];
        let vectors = embedder.embed(&texts).await.unwrap();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].len(), embedder.dimension());
        assert_eq!(vectors[1].len(), embedder.dimension());
    }

    #[tokio::test]
    #[ignore]
    async fn test_embed_is_deterministic_for_identical_input() {
        let embedder = FastEmbedder::new().unwrap();

        let text = vec!["CREATE TABLE Sales.Orders (\n);".to_string()];
        let first = embedder.embed(&text).await.unwrap();
        let second = embedder.embed(&text).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    #[ignore]
    async fn test_embed_empty_input_returns_no_vectors() {
        let embedder = FastEmbedder::new().unwrap();
        let vectors = embedder.embed(&[]).await.unwrap();
        assert!(vectors.is_empty());
    }
}
