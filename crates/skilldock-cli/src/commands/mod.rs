//! Command implementations and dispatch logic.
//!
//! Each command is an async (or plain) function taking a CommandContext,
//! which carries the shared registry client and output handler.

use skilldock_registry::RegistryClient;

pub mod content;
pub mod install;
pub mod plugins;
pub mod skills;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::output::OutputHandler;
use crate::Commands;

/// Shared context for all commands
pub struct CommandContext {
    pub client: RegistryClient,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context with a default registry client
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: RegistryClient::new()?,
            output: OutputHandler::new(),
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> anyhow::Result<()> {
    match command {
        Commands::Plugins {
            offset,
            limit,
            query,
            json,
        } => plugins::execute(offset, limit, query, json, ctx).await,
        Commands::Skills {
            offset,
            limit,
            query,
            json,
        } => skills::execute(offset, limit, query, json, ctx).await,
        Commands::Content { url } => content::execute(url, ctx).await,
        Commands::InstallCmd {
            identifier,
            client,
            local,
            package_manager,
        } => install::execute(identifier, client, local, package_manager),
        Commands::Stats => stats::execute(ctx),
    }
}
