//! Text-generation-inference client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use askpdf_core::{Config, Error, GenerationProvider, Result, SamplingParams};

/// Client for a text-generation-inference style `/generate` endpoint
///
/// The parameter names mirror a transformers `generate()` call, so the
/// sampling configuration maps through unchanged. The server is pinned to
/// one model; the configured model name is advisory and only logged.
pub struct TgiClient {
    client: Client,
    base_url: String,
    model_name: String,
    params: SamplingParams,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    do_sample: bool,
    repetition_penalty: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_of: Option<u32>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generated_text: String,
}

impl TgiClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.generation_timeout_secs))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        tracing::info!(
            model = %config.llm_model_name,
            url = %config.generation_url,
            device_map = config.device_map.as_deref().unwrap_or("default"),
            "configured generation backend"
        );

        Ok(Self {
            client,
            base_url: config.generation_url.trim_end_matches('/').to_string(),
            model_name: config.llm_model_name.clone(),
            params: SamplingParams::from_config(config),
        })
    }

    /// Model name this client was configured with
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                max_new_tokens: self.params.max_new_tokens,
                temperature: self.params.temperature,
                top_p: self.params.top_p,
                do_sample: self.params.do_sample,
                repetition_penalty: self.params.repetition_penalty,
                // best_of is only meaningful for more than one sequence
                best_of: (self.params.num_return_sequences > 1)
                    .then_some(self.params.num_return_sequences),
            },
        }
    }
}

#[async_trait]
impl GenerationProvider for TgiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout("generation request timed out".to_string())
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Generation(format!(
                "Generation request failed with status {}: {}",
                status, error_text
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("Invalid response body: {}", e)))?;

        Ok(extract_answer(&data.generated_text).to_string())
    }
}

/// Reduce raw model output to the answer portion
///
/// The prompt template ends with an `Answer:` cue and backends may echo the
/// prompt, so everything up to the last marker is dropped.
pub fn extract_answer(raw: &str) -> &str {
    if let Some(pos) = raw.rfind("Answer:") {
        raw[pos + "Answer:".len()..].trim()
    } else if let Some(pos) = raw.rfind("Answer") {
        raw[pos + "Answer".len()..].trim()
    } else {
        raw.trim()
    }
}
