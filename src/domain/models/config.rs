//! Application configuration model.

use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;
use crate::infrastructure::notion::NOTION_API_BASE;

/// Main configuration structure for obsidian-to-notion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Notion API connection settings
    #[serde(default)]
    pub notion: NotionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// Notion API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotionConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    NOTION_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
