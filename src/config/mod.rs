mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable consulted when the config file leaves `llm.api_key` empty.
pub const API_KEY_ENV: &str = "LLM_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = load_from_path(&config_path).await?;
    resolve_api_key(&mut config, env::var(API_KEY_ENV).ok());
    config.validate()?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Fills an empty API key from the environment value, if one was given.
pub fn resolve_api_key(config: &mut Config, env_value: Option<String>) {
    if config.llm.api_key.trim().is_empty() {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            config.llm.api_key = key;
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "llm.api_key is empty and {} is not set",
                API_KEY_ENV
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}
