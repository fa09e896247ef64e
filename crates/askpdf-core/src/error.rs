//! Error types for the askpdf system

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the askpdf system
#[derive(Error, Debug)]
pub enum Error {
    #[error("Document processing error: {0}")]
    DocumentProcessing(String),

    #[error("PDF produced no usable text")]
    EmptyCorpus,

    #[error("No index available, ingest a PDF first")]
    NoIndex,

    #[error("Prompt template error: {0}")]
    Template(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
