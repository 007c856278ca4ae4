//! Infrastructure layer
//!
//! External integrations: the Notion HTTP client, configuration loading,
//! credentials and logging.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod notion;
