//! Local embedding provider for askpdf
//!
//! Wraps a fastembed ONNX model behind the `EmbeddingProvider` trait. Model
//! files are fetched into the local cache on first use.

mod embedder;

pub use embedder::FastembedEmbedder;

// Re-export core types for convenience
pub use askpdf_core::{ChunkParams, EmbeddingProvider, Error, Result};
