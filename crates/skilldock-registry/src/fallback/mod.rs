//! Bundled static dataset served when the registry is unreachable.
//!
//! A short, real snapshot of popular catalog entries. Listing views degrade
//! to this data instead of surfacing a hard error when the network fails on
//! the first unfiltered page.

use skilldock_core::types::{PaginatedResponse, Plugin, Skill};

use crate::api::default_supported_clients;

/// Static plugin list for degraded mode
pub fn fallback_plugins() -> Vec<Plugin> {
    vec![
        Plugin {
            id: "c761e569-b7fb-4463-b5a4-b5f7f579680a".to_string(),
            name: "frontend-design".to_string(),
            description:
                "Create distinctive, production-grade frontend interfaces with high design quality."
                    .to_string(),
            owner: "anthropics".to_string(),
            repo: "claude-code-plugins".to_string(),
            downloads: 2791,
            stars: 53917,
            category: "development".to_string(),
            tags: vec![],
            install_command:
                "npx claude-plugins install @anthropics/claude-code-plugins/frontend-design"
                    .to_string(),
        },
        Plugin {
            id: "b050a15f-4682-41c5-aa6f-b0e555896a12".to_string(),
            name: "compounding-engineering".to_string(),
            description: "AI-powered development tools that get smarter with every use."
                .to_string(),
            owner: "EveryInc".to_string(),
            repo: "every-marketplace".to_string(),
            downloads: 1396,
            stars: 2354,
            category: "ai-powered".to_string(),
            tags: vec!["ai-powered".to_string(), "workflow-automation".to_string()],
            install_command:
                "npx claude-plugins install @EveryInc/every-marketplace/compounding-engineering"
                    .to_string(),
        },
        Plugin {
            id: "c07e9b41-81e5-4999-9460-6d4a34f19491".to_string(),
            name: "feature-dev".to_string(),
            description: "Comprehensive feature development workflow with specialized agents."
                .to_string(),
            owner: "anthropics".to_string(),
            repo: "claude-code-plugins".to_string(),
            downloads: 1377,
            stars: 53917,
            category: "development".to_string(),
            tags: vec![],
            install_command:
                "npx claude-plugins install @anthropics/claude-code-plugins/feature-dev"
                    .to_string(),
        },
    ]
}

/// Static skill list for degraded mode
pub fn fallback_skills() -> Vec<Skill> {
    vec![
        Skill {
            id: "4c08e453-73f3-4c10-9dbc-2174ed8e3f11".to_string(),
            name: "frontend-design".to_string(),
            description:
                "Create distinctive, production-grade frontend interfaces with high design quality."
                    .to_string(),
            owner: "anthropics".to_string(),
            repo: "claude-code".to_string(),
            downloads: 8702,
            stars: 52420,
            tags: vec![],
            install_identifier: "@anthropics/claude-code/frontend-design".to_string(),
            supported_clients: default_supported_clients(),
            raw_file_url: Some(
                "https://raw.githubusercontent.com/anthropics/claude-code/main/plugins/frontend-design/skills/frontend-design/SKILL.md"
                    .to_string(),
            ),
        },
        Skill {
            id: "7ddc88c4-47d8-4cc2-9263-94f08dced4f8".to_string(),
            name: "prompt-engineering-patterns".to_string(),
            description: "Master advanced prompt engineering techniques to maximize LLM performance."
                .to_string(),
            owner: "wshobson".to_string(),
            repo: "agents".to_string(),
            downloads: 886,
            stars: 20969,
            tags: vec![],
            install_identifier: "@wshobson/agents/prompt-engineering-patterns".to_string(),
            supported_clients: default_supported_clients(),
            raw_file_url: Some(
                "https://raw.githubusercontent.com/wshobson/agents/main/skills/prompt-engineering-patterns/SKILL.md"
                    .to_string(),
            ),
        },
        Skill {
            id: "a1299c1e-12ab-44af-a931-d7fa0254de10".to_string(),
            name: "brainstorming".to_string(),
            description:
                "You MUST use this before any creative work - creating features, building components."
                    .to_string(),
            owner: "obra".to_string(),
            repo: "superpowers".to_string(),
            downloads: 825,
            stars: 14889,
            tags: vec![],
            install_identifier: "@obra/superpowers/brainstorming".to_string(),
            supported_clients: default_supported_clients(),
            raw_file_url: Some(
                "https://raw.githubusercontent.com/obra/superpowers/main/skills/brainstorming/SKILL.md"
                    .to_string(),
            ),
        },
    ]
}

/// Fallback page for the first unfiltered plugin listing
pub fn plugin_page() -> PaginatedResponse<Plugin> {
    let items = fallback_plugins();
    let total = items.len() as u64;
    PaginatedResponse {
        items,
        total,
        has_more: false,
    }
}

/// Fallback page for the first unfiltered skill listing
pub fn skill_page() -> PaginatedResponse<Skill> {
    let items = fallback_skills();
    let total = items.len() as u64;
    PaginatedResponse {
        items,
        total,
        has_more: false,
    }
}
