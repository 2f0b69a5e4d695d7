//! Unit tests for command-line parsing

use clap::Parser;

use crate::{Cli, Commands};

#[test]
fn test_plugins_defaults() {
    let cli = Cli::try_parse_from(["skilldock", "plugins"]).unwrap();

    match cli.command {
        Commands::Plugins {
            offset,
            limit,
            query,
            json,
        } => {
            assert_eq!(offset, 0);
            assert_eq!(limit, 20);
            assert_eq!(query, None);
            assert!(!json);
        }
        _ => panic!("expected plugins command"),
    }
}

#[test]
fn test_skills_with_query_and_pagination() {
    let cli = Cli::try_parse_from([
        "skilldock", "skills", "--offset", "40", "--limit", "10", "-q", "git",
    ])
    .unwrap();

    match cli.command {
        Commands::Skills {
            offset,
            limit,
            query,
            ..
        } => {
            assert_eq!(offset, 40);
            assert_eq!(limit, 10);
            assert_eq!(query.as_deref(), Some("git"));
        }
        _ => panic!("expected skills command"),
    }
}

#[test]
fn test_install_cmd_defaults() {
    let cli = Cli::try_parse_from(["skilldock", "install-cmd", "@owner/repo/skill"]).unwrap();

    match cli.command {
        Commands::InstallCmd {
            identifier,
            client,
            local,
            package_manager,
        } => {
            assert_eq!(identifier, "@owner/repo/skill");
            assert_eq!(client, "claude-code");
            assert!(!local);
            assert_eq!(package_manager, "npx");
        }
        _ => panic!("expected install-cmd command"),
    }
}

#[test]
fn test_install_cmd_rejects_unknown_client() {
    let result = super::install::execute(
        "@owner/repo/skill".to_string(),
        "not-a-client".to_string(),
        false,
        "npx".to_string(),
    );

    assert!(result.is_err());
}

#[test]
fn test_install_cmd_requires_identifier() {
    assert!(Cli::try_parse_from(["skilldock", "install-cmd"]).is_err());
}

#[test]
fn test_verbose_flag_is_global() {
    let cli = Cli::try_parse_from(["skilldock", "stats", "--verbose"]).unwrap();
    assert!(cli.verbose);
}
