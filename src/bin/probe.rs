//! Sends a single prompt to the configured inference server and prints the
//! reply. Useful for checking that Ollama is reachable before starting the
//! gateway.

use anyhow::{Context, Result};
use itinerary_gateway::{
    config,
    llm::{LlmClient, OllamaClient},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let prompt = std::env::args().nth(1).unwrap_or_else(|| "Hello".to_string());

    let config = config::load()
        .await
        .context("Failed to load configuration")?;
    let client = OllamaClient::new(config.llm);

    let reply = client
        .generate(&prompt)
        .await
        .with_context(|| format!("No reply from {}", client.endpoint()))?;

    println!("AI Response: {}", reply);

    Ok(())
}
