use clap::Parser;
use obsidian_to_notion::cli::{Cli, Commands};

#[test]
fn test_parse_connect_with_token_after_subcommand() {
    let cli = Cli::try_parse_from(["obsidian-to-notion", "connect", "--token", "secret_abc"]).unwrap();

    assert_eq!(cli.token.as_deref(), Some("secret_abc"));
    assert!(!cli.json);
    match cli.command {
        Commands::Connect(args) => assert_eq!(args.timeout, None),
    }
}

#[test]
fn test_parse_global_flags_before_subcommand() {
    let cli = Cli::try_parse_from([
        "obsidian-to-notion",
        "--token",
        "secret_abc",
        "--json",
        "connect",
        "--timeout",
        "5",
    ])
    .unwrap();

    assert_eq!(cli.token.as_deref(), Some("secret_abc"));
    assert!(cli.json);
    match cli.command {
        Commands::Connect(args) => assert_eq!(args.timeout, Some(5)),
    }
}

#[test]
fn test_parse_connect_without_token() {
    let cli = Cli::try_parse_from(["obsidian-to-notion", "connect"]).unwrap();
    assert_eq!(cli.token, None);
}

#[test]
fn test_parse_config_path() {
    let cli = Cli::try_parse_from([
        "obsidian-to-notion",
        "connect",
        "--config",
        "/etc/obsidian-to-notion.yaml",
    ])
    .unwrap();

    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/obsidian-to-notion.yaml"))
    );
}

#[test]
fn test_parse_rejects_zero_timeout() {
    let result = Cli::try_parse_from(["obsidian-to-notion", "connect", "--timeout", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_requires_subcommand() {
    let result = Cli::try_parse_from(["obsidian-to-notion", "--token", "secret_abc"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_unknown_subcommand() {
    let result = Cli::try_parse_from(["obsidian-to-notion", "migrate"]);
    assert!(result.is_err());
}
