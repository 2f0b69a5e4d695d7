//! Registry API response parsing.
//!
//! The registry's JSON is loosely shaped: fields go missing, arrive with the
//! wrong type, or live under alternate names depending on the endpoint
//! version. Parsing here is tolerant by contract; every missing or mistyped
//! field is a defaulting rule, never an error. The functions are named and
//! separate so the defaulting rules stay testable.

use serde_json::Value;

use skilldock_core::install::plugin_install_command;
use skilldock_core::types::{ClientKind, PaginatedResponse, Plugin, Skill};

/// Clients the skills installer currently targets
pub fn default_supported_clients() -> Vec<ClientKind> {
    vec![
        ClientKind::ClaudeCode,
        ClientKind::Cursor,
        ClientKind::Vscode,
        ClientKind::Codex,
        ClientKind::Amp,
        ClientKind::Opencode,
        ClientKind::Goose,
        ClientKind::Letta,
        ClientKind::Github,
    ]
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn u64_field(data: &Value, key: &str) -> u64 {
    data.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn string_list(data: &Value, key: &str) -> Option<Vec<String>> {
    let list = data.get(key)?.as_array()?;
    Some(
        list.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

/// Split a registry namespace (`@owner/repo`) into its parts
fn namespace_parts(namespace: &str) -> (&str, &str) {
    let trimmed = namespace.trim_start_matches('@');
    match trimmed.split_once('/') {
        Some((owner, repo)) => (owner, repo),
        None => (trimmed, ""),
    }
}

fn non_empty(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value
    }
}

/// Normalize one untyped plugin record into a fully-defaulted `Plugin`
pub fn parse_plugin(data: &Value) -> Plugin {
    let namespace = str_field(data, "namespace");
    let (ns_owner, ns_repo) = namespace_parts(&namespace);

    let owner = non_empty(ns_owner.to_string(), || str_field(data, "owner"));
    let repo = non_empty(ns_repo.to_string(), || str_field(data, "repo"));
    let name = non_empty(str_field(data, "name"), || "Unknown".to_string());

    let category = non_empty(str_field(data, "category"), || {
        data.get("tags")
            .and_then(Value::as_array)
            .and_then(|tags| tags.first())
            .and_then(Value::as_str)
            .unwrap_or("other")
            .to_string()
    });

    Plugin {
        id: non_empty(str_field(data, "id"), || {
            format!("{}/{}/{}", owner, repo, name)
        }),
        description: str_field(data, "description"),
        downloads: u64_field(data, "downloads"),
        stars: u64_field(data, "stars"),
        category,
        tags: string_list(data, "keywords")
            .or_else(|| string_list(data, "tags"))
            .unwrap_or_default(),
        install_command: plugin_install_command(&namespace, &name),
        owner,
        repo,
        name,
    }
}

/// Normalize one untyped skill record into a fully-defaulted `Skill`
pub fn parse_skill(data: &Value) -> Skill {
    let namespace = str_field(data, "namespace");
    let (ns_owner, ns_repo) = namespace_parts(&namespace);

    let owner = non_empty(str_field(data, "author"), || {
        non_empty(ns_owner.to_string(), || str_field(data, "owner"))
    });
    let repo = non_empty(ns_repo.to_string(), || str_field(data, "repo"));
    let name = non_empty(str_field(data, "name"), || "Unknown".to_string());

    // Skill endpoints report `installs`; older payloads use `downloads`
    let downloads = data
        .get("installs")
        .and_then(Value::as_u64)
        .unwrap_or_else(|| u64_field(data, "downloads"));

    let raw_file_url = data
        .get("metadata")
        .and_then(|meta| meta.get("rawFileUrl"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Skill {
        id: non_empty(str_field(data, "id"), || {
            format!("{}/{}/{}", owner, repo, name)
        }),
        description: str_field(data, "description"),
        downloads,
        stars: u64_field(data, "stars"),
        tags: string_list(data, "keywords")
            .or_else(|| string_list(data, "tags"))
            .unwrap_or_default(),
        install_identifier: non_empty(namespace.clone(), || {
            format!("@{}/{}/{}", owner, repo, name)
        }),
        supported_clients: default_supported_clients(),
        raw_file_url,
        owner,
        repo,
        name,
    }
}

/// Items array from a page body: a named field, or the bare-array form
fn items_array<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Parse a `{plugins, total}` page body (or a bare plugin array)
pub fn parse_plugin_page(body: &Value, offset: u64) -> PaginatedResponse<Plugin> {
    let items: Vec<Plugin> = items_array(body, "plugins").iter().map(parse_plugin).collect();
    let total = u64_field(body, "total");
    PaginatedResponse::new(items, total, offset)
}

/// Parse a `{skills, total}` page body (or a bare skill array)
pub fn parse_skill_page(body: &Value, offset: u64) -> PaginatedResponse<Skill> {
    let items: Vec<Skill> = items_array(body, "skills").iter().map(parse_skill).collect();
    let total = u64_field(body, "total");
    PaginatedResponse::new(items, total, offset)
}
