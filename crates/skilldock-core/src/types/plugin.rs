//! Plugin catalog item type.

use serde::{Deserialize, Serialize};

/// A plugin package listed in the registry
///
/// Fields are fully defaulted during wire parsing; a `Plugin` value never
/// carries missing data, only empty strings, zeros, or empty vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub repo: String,
    pub downloads: u64,
    pub stars: u64,
    pub category: String,
    pub tags: Vec<String>,
    pub install_command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_field_names() {
        let plugin = Plugin {
            id: "a/b/c".into(),
            name: "c".into(),
            description: String::new(),
            owner: "a".into(),
            repo: "b".into(),
            downloads: 1,
            stars: 2,
            category: "other".into(),
            tags: vec![],
            install_command: "npx claude-plugins install @a/b/c".into(),
        };
        let json = serde_json::to_value(&plugin).unwrap();
        assert!(json.get("installCommand").is_some());
        assert!(json.get("install_command").is_none());
    }
}
