use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs one non-streamed generation and returns the produced text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Self {
        let endpoint = format!("{}/api/generate", config.base_url.trim_end_matches('/'));

        Self {
            client: reqwest::Client::new(),
            endpoint,
            model: config.model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_for(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        }
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            "Requesting generation from {} with model {} ({} prompt chars)",
            self.endpoint,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request_for(prompt))
            .send()
            .await
            .map_err(|e| Error::llm(format!("generation failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "generation failed: upstream returned {}: {}",
                status, body
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("generation failed: malformed response: {}", e)))?;

        debug!(
            "Received generation of {} chars",
            generated.response.len()
        );

        Ok(generated.response)
    }
}
