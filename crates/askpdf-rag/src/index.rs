//! In-memory vector index and the builder/retriever around it

use std::cmp::Ordering;
use std::sync::Arc;

use askpdf_core::{EmbeddingProvider, Error, Result, ScoredChunk, Segment};

use crate::chunker::chunk_text;

struct IndexEntry {
    id: String,
    text: String,
    page: usize,
    embedding: Vec<f32>,
}

/// Searchable structure over embedded chunks
///
/// One index exists per ingested PDF; rebuilding replaces it entirely.
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
}

impl VectorIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank all entries against a query vector
    ///
    /// Results are sorted by descending similarity, truncated to `top_k`,
    /// and then filtered by the cutoff, so fewer than `top_k` results
    /// (including zero) is a legitimate outcome. The sort is stable, which
    /// keeps tied entries in insertion order and makes repeated searches
    /// rank identically.
    pub fn search_by_vector(&self, vector: &[f32], top_k: usize, cutoff: f32) -> Vec<ScoredChunk> {
        let mut results: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                id: entry.id.clone(),
                text: entry.text.clone(),
                page: entry.page,
                score: cosine_similarity(vector, &entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(top_k);
        results.retain(|chunk| chunk.score >= cutoff);

        results
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Builds vector indexes from segments and retrieves against them
///
/// The same embedding provider embeds indexed chunks and queries so their
/// similarities are comparable.
pub struct IndexBuilder<E: EmbeddingProvider> {
    embedder: Arc<E>,
}

impl<E: EmbeddingProvider> IndexBuilder<E> {
    pub fn new(embedder: Arc<E>) -> Self {
        Self { embedder }
    }

    /// Build a fresh index from segments
    ///
    /// Each segment is split per the provider's chunk parameters and every
    /// chunk is embedded. Fails with `EmptyCorpus` when there is nothing to
    /// index.
    pub fn build(&self, segments: &[Segment]) -> Result<VectorIndex> {
        if segments.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let params = self.embedder.chunk_params();
        let mut entries = Vec::new();

        for segment in segments {
            let chunks = chunk_text(&segment.text, params);
            let chunk_refs: Vec<&str> = chunks.iter().map(String::as_str).collect();
            let embeddings = self.embedder.embed_batch(&chunk_refs)?;

            for (i, (chunk, embedding)) in chunks.iter().zip(embeddings).enumerate() {
                entries.push(IndexEntry {
                    id: format!("{}_{}", segment.id, i),
                    text: chunk.clone(),
                    page: segment.page,
                    embedding,
                });
            }
        }

        if entries.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        Ok(VectorIndex { entries })
    }

    /// Retrieve the most similar chunks for a query
    pub fn retrieve(
        &self,
        index: &VectorIndex,
        query: &str,
        top_k: usize,
        cutoff: f32,
    ) -> Result<Vec<ScoredChunk>> {
        let query_vector = self.embedder.embed(query)?;
        Ok(index.search_by_vector(&query_vector, top_k, cutoff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askpdf_core::ChunkParams;

    /// Embeds a handful of known words onto fixed axes
    struct AxisEmbedder;

    impl EmbeddingProvider for AxisEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            let v = match text.split_whitespace().next().unwrap_or("") {
                "alpha" => vec![1.0, 0.0, 0.0],
                "beta" => vec![0.0, 1.0, 0.0],
                "mixed" => vec![1.0, 1.0, 0.0],
                _ => vec![0.0, 0.0, 1.0],
            };
            Ok(v)
        }

        fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }

        fn chunk_params(&self) -> ChunkParams {
            ChunkParams {
                chunk_size: 1024,
                chunk_overlap: 0,
            }
        }
    }

    fn segment(id: &str, text: &str) -> Segment {
        Segment {
            id: id.to_string(),
            text: text.to_string(),
            page: 1,
        }
    }

    #[test]
    fn build_rejects_empty_segments() {
        let builder = IndexBuilder::new(Arc::new(AxisEmbedder));
        assert!(matches!(builder.build(&[]), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn search_orders_by_descending_similarity() {
        let builder = IndexBuilder::new(Arc::new(AxisEmbedder));
        let index = builder
            .build(&[
                segment("a", "alpha text"),
                segment("b", "beta text"),
                segment("m", "mixed text"),
            ])
            .unwrap();

        let results = builder.retrieve(&index, "alpha question", 3, 0.0).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "a_0");
        assert!((results[0].score - 1.0).abs() < 1e-6);
        assert_eq!(results[1].id, "m_0");
        assert!(results[1].score < results[0].score);
    }

    #[test]
    fn cutoff_filters_after_truncation() {
        let builder = IndexBuilder::new(Arc::new(AxisEmbedder));
        let index = builder
            .build(&[segment("a", "alpha text"), segment("b", "beta text")])
            .unwrap();

        // beta is orthogonal to the query, so only one survivor
        let results = builder.retrieve(&index, "alpha question", 2, 0.5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a_0");

        // and zero survivors is a valid outcome
        let results = builder.retrieve(&index, "gamma question", 2, 0.5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn top_k_bounds_the_result_count() {
        let builder = IndexBuilder::new(Arc::new(AxisEmbedder));
        let index = builder
            .build(&[
                segment("a", "alpha one"),
                segment("b", "alpha two"),
                segment("c", "alpha three"),
            ])
            .unwrap();

        let results = builder.retrieve(&index, "alpha", 2, 0.0).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn cosine_similarity_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        // mismatched dimensionality scores zero instead of panicking
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn long_segments_are_split_before_embedding() {
        struct TinyChunks;

        impl EmbeddingProvider for TinyChunks {
            fn embed(&self, _text: &str) -> Result<Vec<f32>> {
                Ok(vec![1.0, 0.0])
            }
            fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
                texts.iter().map(|t| self.embed(t)).collect()
            }
            fn chunk_params(&self) -> ChunkParams {
                ChunkParams {
                    chunk_size: 4,
                    chunk_overlap: 1,
                }
            }
        }

        let builder = IndexBuilder::new(Arc::new(TinyChunks));
        let index = builder.build(&[segment("s", "abcdefghij")]).unwrap();
        assert!(index.len() > 1);
    }
}
