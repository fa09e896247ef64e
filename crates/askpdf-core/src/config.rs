//! Configuration for the askpdf system
//!
//! A flat, immutable parameter set constructed once at startup, either from
//! built-in defaults or from named environment variables. Values are only
//! type-coerced, never range-validated; out-of-range settings surface as
//! failures downstream.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Configuration for the askpdf system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Embedding model identifier
    pub embedding_model_name: String,
    /// Generation model identifier (advisory for HTTP backends pinned to one model)
    pub llm_model_name: String,
    /// Base URL of the text-generation endpoint
    pub generation_url: String,
    /// Per-request generation timeout in seconds
    pub generation_timeout_secs: u64,
    /// Chunk size in characters for index units
    pub chunk_size: usize,
    /// Overlap in characters between consecutive chunks
    pub chunk_overlap: usize,
    /// Maximum number of retrieval results before cutoff filtering
    pub similarity_top_k: usize,
    /// Minimum similarity score for a retrieval result to be kept
    pub similarity_cutoff: f32,
    pub max_new_tokens: u32,
    pub num_return_sequences: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
    pub repetition_penalty: f32,
    /// Device placement hint, forwarded to logs only
    pub device_map: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedding_model_name: "BAAI/bge-small-en-v1.5".to_string(),
            llm_model_name: "Qwen/Qwen2.5-1.5B-Instruct".to_string(),
            generation_url: "http://localhost:8080".to_string(),
            generation_timeout_secs: 120,
            chunk_size: 256,
            chunk_overlap: 15,
            similarity_top_k: 2,
            similarity_cutoff: 0.5,
            max_new_tokens: 512,
            num_return_sequences: 1,
            temperature: 0.3,
            top_p: 0.9,
            do_sample: true,
            repetition_penalty: 1.2,
            device_map: None,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// Each field falls back to its default when the variable is absent or
    /// fails to parse; a bad value is logged and skipped rather than
    /// aborting startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            embedding_model_name: env::var("EMBEDDING_MODEL_NAME")
                .unwrap_or(defaults.embedding_model_name),
            llm_model_name: env::var("LLM_MODEL_NAME").unwrap_or(defaults.llm_model_name),
            generation_url: env::var("GENERATION_API_URL").unwrap_or(defaults.generation_url),
            generation_timeout_secs: parse_or(
                "GENERATION_TIMEOUT_SECS",
                env::var("GENERATION_TIMEOUT_SECS").ok().as_deref(),
                defaults.generation_timeout_secs,
            ),
            chunk_size: parse_or(
                "CHUNK_SIZE",
                env::var("CHUNK_SIZE").ok().as_deref(),
                defaults.chunk_size,
            ),
            chunk_overlap: parse_or(
                "CHUNK_OVERLAP",
                env::var("CHUNK_OVERLAP").ok().as_deref(),
                defaults.chunk_overlap,
            ),
            similarity_top_k: parse_or(
                "SIMILARITY_TOP_K",
                env::var("SIMILARITY_TOP_K").ok().as_deref(),
                defaults.similarity_top_k,
            ),
            similarity_cutoff: parse_or(
                "SIMILARITY_CUTOFF",
                env::var("SIMILARITY_CUTOFF").ok().as_deref(),
                defaults.similarity_cutoff,
            ),
            max_new_tokens: parse_or(
                "MAX_NEW_TOKENS",
                env::var("MAX_NEW_TOKENS").ok().as_deref(),
                defaults.max_new_tokens,
            ),
            num_return_sequences: parse_or(
                "NUM_RETURN_SEQUENCES",
                env::var("NUM_RETURN_SEQUENCES").ok().as_deref(),
                defaults.num_return_sequences,
            ),
            temperature: parse_or(
                "TEMPERATURE",
                env::var("TEMPERATURE").ok().as_deref(),
                defaults.temperature,
            ),
            top_p: parse_or("TOP_P", env::var("TOP_P").ok().as_deref(), defaults.top_p),
            do_sample: parse_bool(env::var("DO_SAMPLE").ok().as_deref(), defaults.do_sample),
            repetition_penalty: parse_or(
                "REPETITION_PENALTY",
                env::var("REPETITION_PENALTY").ok().as_deref(),
                defaults.repetition_penalty,
            ),
            device_map: env::var("DEVICE_MAP").ok().filter(|v| !v.trim().is_empty()),
        }
    }
}

/// Parse an environment value, falling back to the default on absence or
/// parse failure
fn parse_or<T: FromStr + Display>(key: &str, raw: Option<&str>, default: T) -> T {
    match raw {
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(%key, %value, %default, "ignoring unparsable value");
                default
            }
        },
        None => default,
    }
}

/// Booleans accept any casing of "true"; everything else is false
fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(value) => value.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}
