//! Skill catalog item type.

use serde::{Deserialize, Serialize};

use super::ClientKind;

/// A skill listed in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub repo: String,
    pub downloads: u64,
    pub stars: u64,
    pub tags: Vec<String>,
    pub install_identifier: String,
    pub supported_clients: Vec<ClientKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_file_url: Option<String>,
}

/// Direct-download location for a skill's SKILL.md file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadInfo {
    pub url: String,
    pub filename: String,
}

impl Skill {
    /// Download location for the raw SKILL.md, when the registry exposes one
    ///
    /// The raw file URL points straight at the skill definition on the
    /// hosting forge, so it can be fetched without going through the
    /// registry API.
    pub fn download_info(&self) -> Option<DownloadInfo> {
        let url = self.raw_file_url.clone()?;
        Some(DownloadInfo {
            url,
            filename: format!("{}.md", self.name),
        })
    }
}
