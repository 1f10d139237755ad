//! Embedder trait for text-to-vector conversion.
//!
//! Defines the interface for embedding schema documents into fixed-length
//! vectors. Implementations (e.g., a local ONNX sentence-embedding model)
//! live in schemantic-infra.

use schemantic_types::error::IndexError;

/// Trait for converting text into embedding vectors.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in schemantic-infra.
pub trait Embedder: Send + Sync {
    /// Embed one or more texts into vectors, one vector per input text.
    ///
    /// The model is stateless across calls: identical input yields identical
    /// (up to floating-point reproducibility) vectors.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, IndexError>> + Send;

    /// The fixed model identifier used for embeddings.
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}
