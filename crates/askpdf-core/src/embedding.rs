//! Embedding provider trait

use crate::{ChunkParams, Result};

/// Trait for embedding providers (e.g., fastembed-backed local models)
///
/// Maps text to a fixed-length vector. The same provider must embed both
/// indexed chunks and queries so their similarities are comparable. The
/// provider also declares the chunking parameters the index builder uses
/// when splitting long segments.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text into a fixed-length vector
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Chunking parameters to apply before embedding
    fn chunk_params(&self) -> ChunkParams;
}
