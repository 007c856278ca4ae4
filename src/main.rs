//! obsidian-to-notion CLI entry point.

use clap::Parser;

use obsidian_to_notion::cli::{commands, handle_error, Cli, Commands};
use obsidian_to_notion::infrastructure::logging::LoggerImpl;
use obsidian_to_notion::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
    .unwrap_or_else(|err| handle_error(err, cli.json));

    let logger = LoggerImpl::init(&config.logging).unwrap_or_else(|err| handle_error(err, cli.json));

    let result = match cli.command {
        Commands::Connect(args) => {
            commands::connect::execute(args, cli.token, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        // flush buffered file output before exiting
        drop(logger);
        handle_error(err, cli.json);
    }
}
