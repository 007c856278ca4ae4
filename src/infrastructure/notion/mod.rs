//! Notion REST API client
//!
//! Authenticated requests against the Notion API with a pinned
//! `Notion-Version`, decoding either the caller's response type or
//! Notion's `{code, message}` error payload.

pub mod client;
pub mod error;

pub use client::{NotionClient, NOTION_API_BASE, NOTION_VERSION};
pub use error::NotionApiError;
