//! `skilldock plugins` command implementation.

use super::CommandContext;

/// Execute the `skilldock plugins` command
pub async fn execute(
    offset: u64,
    limit: u64,
    query: Option<String>,
    json: bool,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let page = ctx
        .client
        .fetch_plugins_paginated(offset, limit, query.as_deref())
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        ctx.output.info("No plugins found.");
        return Ok(());
    }

    for plugin in &page.items {
        ctx.output.entry(
            &plugin.name,
            &format!("{}/{}", plugin.owner, plugin.repo),
            &plugin.description,
        );
        ctx.output.detail(&format!(
            "{} downloads · {} stars · {}",
            plugin.downloads, plugin.stars, plugin.install_command
        ));
    }

    let shown = offset + page.items.len() as u64;
    if page.has_more {
        ctx.output.info(&format!(
            "Showing {} of {} plugins. Use --offset {} for the next page.",
            shown, page.total, shown
        ));
    }

    Ok(())
}
