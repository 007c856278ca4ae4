//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "obsidian-to-notion.yaml";

/// Prefix for environment overrides, `__` separates nested keys
pub const CONFIG_ENV_PREFIX: &str = "OBSIDIAN_TO_NOTION_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `notion.base_url` is blank
    #[error("Notion base URL cannot be empty")]
    EmptyBaseUrl,

    /// `notion.base_url` has no http(s) scheme
    #[error("Invalid Notion base URL: {0}. Must start with http:// or https://")]
    InvalidBaseUrl(String),

    /// `notion.timeout_secs` is zero
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// `logging.level` is not a known level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `obsidian-to-notion.yaml` in the working directory (optional)
    /// 3. Environment variables (`OBSIDIAN_TO_NOTION_*` prefix)
    pub fn load() -> Result<Config> {
        Self::extract(Figment::new().merge(Yaml::file(DEFAULT_CONFIG_FILE)))
    }

    /// Load configuration from a specific file instead of the default one
    ///
    /// Environment variables still take precedence over the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::extract(Figment::new().merge(Yaml::file(path)))
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn extract(files: Figment) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(files)
            .merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = config.notion.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl(config.notion.base_url.clone()));
        }

        if config.notion.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.notion.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
