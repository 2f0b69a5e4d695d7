//! `skilldock skills` command implementation.

use super::CommandContext;

/// Execute the `skilldock skills` command
pub async fn execute(
    offset: u64,
    limit: u64,
    query: Option<String>,
    json: bool,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let page = ctx
        .client
        .fetch_skills_paginated(offset, limit, query.as_deref())
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        ctx.output.info("No skills found.");
        return Ok(());
    }

    for skill in &page.items {
        ctx.output.entry(
            &skill.name,
            &format!("{}/{}", skill.owner, skill.repo),
            &skill.description,
        );
        let clients: Vec<&str> = skill.supported_clients.iter().map(|c| c.id()).collect();
        ctx.output.detail(&format!(
            "{} installs · {} stars · clients: {}",
            skill.downloads,
            skill.stars,
            clients.join(", ")
        ));
        if let Some(info) = skill.download_info() {
            ctx.output.detail(&format!("SKILL.md: {}", info.url));
        }
    }

    let shown = offset + page.items.len() as u64;
    if page.has_more {
        ctx.output.info(&format!(
            "Showing {} of {} skills. Use --offset {} for the next page.",
            shown, page.total, shown
        ));
    }

    Ok(())
}
