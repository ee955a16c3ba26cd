use serde::{Deserialize, Serialize};

/// Body of an Ollama `/api/generate` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

/// Non-streamed `/api/generate` reply. Fields other than `response` are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}
