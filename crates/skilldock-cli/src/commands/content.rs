//! `skilldock content` command implementation.

use super::CommandContext;

/// Execute the `skilldock content` command
pub async fn execute(url: String, ctx: &CommandContext) -> anyhow::Result<()> {
    match ctx.client.fetch_skill_content(&url).await {
        Ok(content) => {
            println!("{}", content);
            Ok(())
        }
        Err(err) => {
            ctx.output.error(&err.to_string());
            if let Some(hint) = err.suggestion() {
                ctx.output.info(hint);
            }
            Err(err.into())
        }
    }
}
