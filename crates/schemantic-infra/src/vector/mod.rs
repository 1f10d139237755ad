//! Vector index infrastructure for schema document embeddings.
//!
//! Provides LanceDB store management, fastembed-based local embedding
//! generation, and the `VectorIndex` implementation. Arrow schemas define
//! the table structure.

pub mod embedder;
pub mod index;
pub mod lance;
pub mod schema;

pub use embedder::FastEmbedder;
pub use index::LanceVectorIndex;
