//! Retrieval pipeline and orchestration for askpdf
//!
//! This crate turns PDF bytes into an in-memory vector index and answers
//! questions against it: document processing, chunking, similarity search,
//! prompt rendering, and the `RagSystem` orchestrator tying them together.

mod chunker;
mod index;
mod processor;
mod prompt;
mod system;


pub use chunker::chunk_text;
pub use index::{IndexBuilder, VectorIndex};
pub use processor::PdfProcessor;
pub use prompt::{DEFAULT_TEMPLATE, PromptTemplate};
pub use system::{
    EMPTY_GENERATION_MESSAGE, NO_RELEVANT_INFORMATION_MESSAGE, NOT_INITIALIZED_MESSAGE, RagSystem,
};

// Re-export core types for convenience
pub use askpdf_core::{
    ChunkParams, Config, DocumentProcessor, EmbeddingProvider, Error, GenerationProvider, Result,
    ScoredChunk, Segment,
};
