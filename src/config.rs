use crate::detection::Placeholders;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "codepad.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub prompt: PromptConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    /// A line equal to this word cancels collection on the terminal.
    pub cancel_word: String,
    pub placeholders: Placeholders,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            cancel_word: ":cancel".to_string(),
            placeholders: Placeholders::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read `path` if it exists, otherwise start from defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Defaults, then the TOML file, then `.env` and process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        info!(base_url = %config.service.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Apply `CODEPAD_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CODEPAD_BASE_URL") {
            self.service.base_url = url;
        }
        if let Some(secs) = lookup("CODEPAD_TIMEOUT_SECS") {
            self.service.request_timeout_seconds =
                secs.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "CODEPAD_TIMEOUT_SECS",
                    reason: format!("expected a whole number of seconds, got {:?}", secs),
                })?;
        }
        if let Some(word) = lookup("CODEPAD_CANCEL_WORD") {
            self.prompt.cancel_word = word;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.service.base_url).map_err(|e| ConfigError::Invalid {
            key: "service.base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                key: "service.base_url",
                reason: format!("unsupported scheme {:?}", url.scheme()),
            });
        }
        if self.service.request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "service.request_timeout_seconds",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
