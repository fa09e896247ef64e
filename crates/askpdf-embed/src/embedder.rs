//! fastembed-backed embedding provider

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use askpdf_core::{ChunkParams, Config, EmbeddingProvider, Error, Result};

/// Embedding provider backed by a local fastembed model
///
/// The fastembed session requires exclusive access, so the model sits
/// behind a `Mutex` and the provider can be shared via `Arc`.
pub struct FastembedEmbedder {
    model: Mutex<TextEmbedding>,
    model_name: String,
    chunk_params: ChunkParams,
}

impl FastembedEmbedder {
    /// Create a provider from configuration, loading the mapped model
    pub fn new(config: &Config) -> Result<Self> {
        let model = resolve_model(&config.embedding_model_name)?;

        tracing::info!(model = %config.embedding_model_name, "loading embedding model");

        let text_embedding =
            TextEmbedding::try_new(InitOptions::new(model).with_show_download_progress(false))
                .map_err(|e| Error::Embedding(e.to_string()))?;

        Ok(Self {
            model: Mutex::new(text_embedding),
            model_name: config.embedding_model_name.clone(),
            chunk_params: ChunkParams {
                chunk_size: config.chunk_size,
                chunk_overlap: config.chunk_overlap,
            },
        })
    }

    /// Model name this provider was configured with
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl EmbeddingProvider for FastembedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text])?;
        vectors
            .pop()
            .ok_or_else(|| Error::Embedding("model returned no embedding".to_string()))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let owned: Vec<String> = texts.iter().map(|s| (*s).to_string()).collect();
        let mut model = self
            .model
            .lock()
            .map_err(|e| Error::Embedding(format!("Lock error: {}", e)))?;
        model
            .embed(owned, None)
            .map_err(|e| Error::Embedding(e.to_string()))
    }

    fn chunk_params(&self) -> ChunkParams {
        self.chunk_params
    }
}

/// Map a configured model name onto a fastembed model
///
/// Accepts the upstream repo form ("BAAI/bge-small-en-v1.5") or the bare
/// model name.
fn resolve_model(name: &str) -> Result<EmbeddingModel> {
    let model = match name.to_lowercase().as_str() {
        "baai/bge-small-en-v1.5" | "bge-small-en-v1.5" => EmbeddingModel::BGESmallENV15,
        "baai/bge-base-en-v1.5" | "bge-base-en-v1.5" => EmbeddingModel::BGEBaseENV15,
        "baai/bge-large-en-v1.5" | "bge-large-en-v1.5" => EmbeddingModel::BGELargeENV15,
        "sentence-transformers/all-minilm-l6-v2" | "all-minilm-l6-v2" => {
            EmbeddingModel::AllMiniLML6V2
        }
        other => {
            return Err(Error::Configuration(format!(
                "Unsupported embedding model: {}",
                other
            )));
        }
    };
    Ok(model)
}
