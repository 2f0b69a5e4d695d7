//! # skilldock-cli
//!
//! Terminal browser for the Skilldock plugin and skill catalog.
//!
//! This is the main entry point for the skilldock CLI tool. It handles
//! command parsing, sets up logging, and dispatches to the command handlers,
//! which consume the registry access layer in `skilldock-registry`.

use clap::{Parser, Subcommand};
use tracing::info;

mod commands;
mod output;

use commands::CommandContext;
use skilldock_registry::{PLUGIN_PAGE_SIZE, SKILL_PAGE_SIZE};

/// Browse, search, and install plugins and skills from the registry
#[derive(Parser)]
#[command(name = "skilldock", version, about = "Browse the plugin and skill catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List plugins from the registry
    Plugins {
        /// Page offset
        #[arg(long, default_value_t = 0)]
        offset: u64,
        /// Page size
        #[arg(long, default_value_t = PLUGIN_PAGE_SIZE)]
        limit: u64,
        /// Search query
        #[arg(short, long)]
        query: Option<String>,
        /// Print the raw page as JSON
        #[arg(long)]
        json: bool,
    },
    /// List skills from the registry
    Skills {
        /// Page offset
        #[arg(long, default_value_t = 0)]
        offset: u64,
        /// Page size
        #[arg(long, default_value_t = SKILL_PAGE_SIZE)]
        limit: u64,
        /// Search query
        #[arg(short, long)]
        query: Option<String>,
        /// Print the raw page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the raw SKILL.md content behind a skill's file URL
    Content {
        /// Raw file URL, as reported by the skills listing
        url: String,
    },
    /// Print the install command for a skill
    InstallCmd {
        /// Skill install identifier, e.g. @owner/repo/name
        identifier: String,
        /// Target client
        #[arg(long, default_value = "claude-code")]
        client: String,
        /// Install into the project instead of the user directory
        #[arg(long)]
        local: bool,
        /// Package manager used to run the installer
        #[arg(long, default_value = "npx")]
        package_manager: String,
    },
    /// Show registry client diagnostics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    info!("Starting skilldock v{}", env!("CARGO_PKG_VERSION"));

    run_cli(cli)
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "skilldock={},skilldock_registry={}",
            level, level
        ))
        .with_target(false)
        .init();
}
