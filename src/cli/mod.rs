//! Command-line interface

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::infrastructure::logging::SecretScrubber;

/// Print a failed command's error to stderr and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("{}", format_error(&err, json_mode));
    std::process::exit(1)
}

/// Render the full error chain, with any credentials redacted
pub fn format_error(err: &anyhow::Error, json_mode: bool) -> String {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
    if json_mode {
        serde_json::json!({ "success": false, "error": message }).to_string()
    } else {
        format!("Error: {message}")
    }
}
