mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration from `CONFIG_PATH`, or `config.yaml` when unset.
///
/// A missing default file is not an error: the built-in defaults reproduce the
/// gateway's stock behaviour. A path named explicitly through `CONFIG_PATH`
/// must exist.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from(&config_path).await,
        Err(_) => {
            if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
                load_from(DEFAULT_CONFIG_PATH).await
            } else {
                debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}

pub async fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();

    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;

    if config.llm.base_url.trim().is_empty() {
        return Err(Error::config("llm.base_url must not be empty"));
    }

    Ok(config)
}
