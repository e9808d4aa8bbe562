//! Configuration: TOML file with environment overrides
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ConfigError, ConfigResult};

/// Environment variable overriding `nlp.api_key`
pub const ENV_NLP_API_KEY: &str = "REFLECTIFY_NLP_API_KEY";
/// Environment variable overriding `nlp.endpoint`
pub const ENV_NLP_ENDPOINT: &str = "REFLECTIFY_NLP_ENDPOINT";
/// Environment variable overriding `server.addr`
pub const ENV_ADDR: &str = "REFLECTIFY_ADDR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub nlp: NlpConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    /// Base URL of the NLP REST API
    pub endpoint: String,
    /// API key; without one the NLP provider is unavailable
    pub api_key: Option<String>,
    /// Document language sent with every request
    pub language: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://language.googleapis.com/v1".to_string(),
            api_key: None,
            language: "de".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Parse TOML text (no env overrides)
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            None => Config::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_NLP_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.nlp.api_key = Some(key);
        }
        if let Some(endpoint) = lookup(ENV_NLP_ENDPOINT) {
            self.nlp.endpoint = endpoint;
        }
        if let Some(addr) = lookup(ENV_ADDR) {
            self.server.addr = addr;
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.nlp.timeout_secs == 0 {
            return Err(ConfigError::Invalid("nlp.timeout_secs must be > 0".into()));
        }
        if self.nlp.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("nlp.endpoint cannot be empty".into()));
        }
        if self.server.addr.trim().is_empty() {
            return Err(ConfigError::Invalid("server.addr cannot be empty".into()));
        }
        Ok(())
    }
}
