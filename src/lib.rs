//! obsidian-to-notion
//!
//! Command-line tool for migrating Obsidian vaults to Notion. The current
//! surface verifies that a Notion integration token can authenticate
//! (`obsidian-to-notion connect`).
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): plain data types (identity, configuration)
//! - **Infrastructure Layer** (`infrastructure`): Notion HTTP client,
//!   configuration loading, credentials and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use obsidian_to_notion::NotionClient;
//!
//! # async fn run() -> Result<(), obsidian_to_notion::NotionApiError> {
//! let client = NotionClient::new("secret_...");
//! let name = client.ping().await?;
//! println!("Connected to Notion as: {name}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{Config, NotionConfig, User};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::{resolve_token, CredentialError};
pub use infrastructure::notion::{NotionApiError, NotionClient};
