//! Implementation of the `obsidian-to-notion connect` command.

use anyhow::{Context, Result};
use clap::Args;
use std::future::Future;
use std::io;
use tracing::info;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, NotionConfig};
use crate::infrastructure::credentials::resolve_token;
use crate::infrastructure::notion::NotionClient;

/// Arguments for `connect`
#[derive(Args, Debug, Default)]
pub struct ConnectArgs {
    /// Request timeout in seconds, overriding the configured value
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Outcome of a successful `connect`
#[derive(Debug, serde::Serialize)]
pub struct ConnectOutput {
    /// Always true; failures are returned as errors
    pub success: bool,
    /// Bot display name, or its id when unnamed
    pub name: String,
    /// API the token was verified against
    pub base_url: String,
}

impl CommandOutput for ConnectOutput {
    fn to_human(&self) -> String {
        format!("Connected to Notion as: {}", self.name)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `connect` and print the result
pub async fn execute(
    args: ConnectArgs,
    token: Option<String>,
    config: &Config,
    json_mode: bool,
) -> Result<()> {
    let output_data = until_interrupted(
        connect(&args, token.as_deref(), &config.notion),
        tokio::signal::ctrl_c(),
    )
    .await?;

    output(&output_data, json_mode);
    Ok(())
}

/// Run `work` unless `interrupt` resolves first.
///
/// An `interrupt` that fails (no signal handler could be installed) is
/// ignored and `work` runs to completion.
pub async fn until_interrupted<T>(
    work: impl Future<Output = Result<T>>,
    interrupt: impl Future<Output = io::Result<()>>,
) -> Result<T> {
    tokio::select! {
        result = work => result,
        Ok(()) = interrupt => anyhow::bail!("connection failed: interrupted"),
    }
}

/// Resolve the token, build a client and ping the API.
///
/// A missing token is reported before any request is made.
pub async fn connect(
    args: &ConnectArgs,
    token: Option<&str>,
    config: &NotionConfig,
) -> Result<ConnectOutput> {
    let token = resolve_token(token)?;

    let mut notion_config = config.clone();
    if let Some(timeout) = args.timeout {
        notion_config.timeout_secs = timeout;
    }

    let client = NotionClient::with_config(token, &notion_config)
        .context("Failed to build Notion client")?;

    info!(base_url = client.base_url(), "verifying Notion connection");
    let name = client.ping().await.context("connection failed")?;

    Ok(ConnectOutput {
        success: true,
        name,
        base_url: client.base_url().to_string(),
    })
}
