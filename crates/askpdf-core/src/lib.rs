//! Core traits and types for askpdf
//!
//! This crate defines the fundamental traits and types used across the
//! askpdf system. It provides capability-facing interfaces for document
//! processing, embedding, and text generation, making the retrieval
//! pipeline test-friendly and extensible.

pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod types;

pub use config::Config;
pub use document::DocumentProcessor;
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
pub use generation::{GenerationProvider, SamplingParams};
pub use types::{ChunkParams, ScoredChunk, Segment};
