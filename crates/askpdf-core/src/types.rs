//! Common types used across the askpdf system

use serde::{Deserialize, Serialize};

/// A contiguous span of text extracted from a PDF
///
/// Segments are produced by the document processor, one or more per page,
/// and are guaranteed non-empty after whitespace trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub text: String,
    /// 1-based page number the text was extracted from
    pub page: usize,
}

/// A retrieved chunk with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub id: String,
    pub text: String,
    pub page: usize,
    pub score: f32,
}

/// Chunking parameters declared by an embedding provider
///
/// Long segments are split into windows of `chunk_size` characters before
/// embedding so each indexed unit stays within the model's effective
/// context. The trailing `chunk_overlap` characters of one window reappear
/// at the start of the next to avoid losing context at boundaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkParams {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}
