use super::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use itinerary_gateway::{
    config::LlmConfig,
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Build the gateway router around a mock client, keeping a handle to the mock
pub fn create_test_app(mock: MockLlmClient) -> (Router, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let app = server::router(AppState::new(mock.clone()));
    (app, mock)
}

/// LLM configuration pointing at a test server
pub fn create_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        ..LlmConfig::default()
    }
}

pub fn itinerary_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/itinerary")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  base_url: "http://inference.internal:11434"
  model: "llama3:8b"
  max_tokens: 1024
  temperature: 0.2
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
