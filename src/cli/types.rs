//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::connect::ConnectArgs;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "obsidian-to-notion")]
#[command(about = "Migrate Obsidian vaults to Notion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Notion integration token (or set NOTION_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./obsidian-to-notion.yaml when present)
    #[arg(long, global = true, value_name = "PATH", env = "OBSIDIAN_TO_NOTION_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify connection to the Notion API
    Connect(ConnectArgs),
}
