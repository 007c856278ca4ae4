//! Data models shared across layers.

pub mod config;
pub mod de;
pub mod user;

pub use config::{Config, NotionConfig};
pub use user::User;
