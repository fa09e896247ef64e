//! Generation provider trait and sampling parameters

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Config, Result};

/// Sampling parameters for text generation
///
/// Generation is deterministic only when `do_sample` is false; otherwise
/// repeated calls may yield different text for the same prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingParams {
    pub max_new_tokens: u32,
    pub num_return_sequences: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
    pub repetition_penalty: f32,
}

impl SamplingParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            num_return_sequences: config.num_return_sequences,
            temperature: config.temperature,
            top_p: config.top_p,
            do_sample: config.do_sample,
            repetition_penalty: config.repetition_penalty,
        }
    }
}

/// Trait for generation providers (e.g., a text-generation-inference server)
///
/// Given a fully rendered prompt, produces a continuation already
/// post-processed down to the answer portion.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
