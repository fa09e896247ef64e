//! RAG system orchestrator

use std::sync::Arc;

use askpdf_core::{
    Config, DocumentProcessor, EmbeddingProvider, Error, GenerationProvider, Result, ScoredChunk,
};

use crate::index::{IndexBuilder, VectorIndex};
use crate::prompt::PromptTemplate;

/// Returned by `answer` before any PDF has been ingested
pub const NOT_INITIALIZED_MESSAGE: &str = "Error: Query engine is not initialized.";

/// Returned by `answer` when retrieval surfaces nothing above the cutoff
pub const NO_RELEVANT_INFORMATION_MESSAGE: &str = "No relevant information from PDF document";

/// Returned by `answer` when the backend produces an empty string
pub const EMPTY_GENERATION_MESSAGE: &str = "Unable to generate a response from PDF documents";

/// Session-scoped RAG orchestrator
///
/// Sequences document processing, index building, retrieval, prompt
/// rendering, and generation. Providers are shared read-only; the current
/// index is exclusively owned state, absent until the first successful
/// ingest and replaced wholesale by later ones.
///
/// This is also the system's single error-translation boundary: `ingest`
/// and `answer` catch component failures, log them, and hand the UI a
/// readable string. Nothing crosses upward as a fault.
pub struct RagSystem<P, E, G>
where
    P: DocumentProcessor,
    E: EmbeddingProvider,
    G: GenerationProvider,
{
    config: Config,
    processor: P,
    builder: IndexBuilder<E>,
    generator: Arc<G>,
    template: PromptTemplate,
    index: Option<VectorIndex>,
}

impl<P, E, G> RagSystem<P, E, G>
where
    P: DocumentProcessor,
    E: EmbeddingProvider,
    G: GenerationProvider,
{
    pub fn new(config: Config, processor: P, embedder: Arc<E>, generator: Arc<G>) -> Self {
        Self {
            config,
            processor,
            builder: IndexBuilder::new(embedder),
            generator,
            template: PromptTemplate::new(),
            index: None,
        }
    }

    /// Whether a PDF has been ingested and questions can be answered
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Swap the prompt template at runtime
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template.set_template(template);
    }

    /// Ingest a PDF and build a fresh index over it
    ///
    /// On success any previous index is discarded. On failure the prior
    /// state is untouched: an existing index keeps answering, and an empty
    /// system stays empty.
    pub fn ingest(&mut self, bytes: &[u8]) -> bool {
        match self.ingest_inner(bytes) {
            Ok(chunks) => {
                tracing::info!(chunks, "indexed PDF");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to ingest PDF");
                false
            }
        }
    }

    fn ingest_inner(&mut self, bytes: &[u8]) -> Result<usize> {
        let segments = self.processor.process(bytes)?;
        if segments.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        // the old index survives unless the new one builds cleanly
        let index = self.builder.build(&segments)?;
        let chunks = index.len();
        self.index = Some(index);
        Ok(chunks)
    }

    /// Retrieve the top-K chunks above the similarity cutoff for a query
    ///
    /// Deterministic for a fixed index and query, independent of the
    /// generation step's sampling.
    pub fn retrieve(&self, query: &str) -> Result<Vec<ScoredChunk>> {
        let index = self.index.as_ref().ok_or(Error::NoIndex)?;
        self.builder.retrieve(
            index,
            query,
            self.config.similarity_top_k,
            self.config.similarity_cutoff,
        )
    }

    /// Answer a question from the ingested PDF
    ///
    /// Always returns a user-facing string, never an error.
    pub async fn answer(&self, query: &str) -> String {
        if self.index.is_none() {
            return NOT_INITIALIZED_MESSAGE.to_string();
        }

        match self.answer_inner(query).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "failed to answer question");
                format!("Error processing your question: {}", e)
            }
        }
    }

    async fn answer_inner(&self, query: &str) -> Result<String> {
        let results = self.retrieve(query)?;

        let context = results
            .iter()
            .map(|chunk| chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        // short-circuit before any prompt is built or the backend is called
        if context.trim().is_empty() {
            return Ok(NO_RELEVANT_INFORMATION_MESSAGE.to_string());
        }

        let prompt = self.template.render(&context, query)?;
        let response = self.generator.generate(&prompt).await?;

        if response.trim().is_empty() {
            return Ok(EMPTY_GENERATION_MESSAGE.to_string());
        }

        Ok(response)
    }
}
