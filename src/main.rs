use anyhow::Result;
use itinerary_gateway::{config, server};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = &config.server.logs.level;
            if let Err(e) = validate_log_level(level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            tracing_subscriber::EnvFilter::new(level)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!(
        "Starting itinerary gateway on port {}",
        config.server.port
    );

    server::run(config).await?;

    Ok(())
}
