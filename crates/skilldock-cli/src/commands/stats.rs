//! `skilldock stats` command implementation.

use super::CommandContext;

/// Execute the `skilldock stats` command
pub fn execute(ctx: &CommandContext) -> anyhow::Result<()> {
    let stats = ctx.client.api_stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
