//! Domain layer for obsidian-to-notion
//!
//! Plain data types shared by the client, the configuration loader and the CLI.

pub mod models;

pub use models::{Config, NotionConfig, User};
