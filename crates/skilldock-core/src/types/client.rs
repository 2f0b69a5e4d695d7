//! Coding clients that can install catalog skills.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A coding client a skill can be installed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientKind {
    Claude,
    ClaudeCode,
    Cursor,
    Vscode,
    Codex,
    Amp,
    Opencode,
    Goose,
    Letta,
    Github,
}

/// Every client the installer currently supports
pub const ALL_CLIENTS: [ClientKind; 10] = [
    ClientKind::Claude,
    ClientKind::ClaudeCode,
    ClientKind::Cursor,
    ClientKind::Vscode,
    ClientKind::Codex,
    ClientKind::Amp,
    ClientKind::Opencode,
    ClientKind::Goose,
    ClientKind::Letta,
    ClientKind::Github,
];

impl ClientKind {
    /// Wire identifier used in install commands and registry payloads
    pub fn id(&self) -> &'static str {
        match self {
            ClientKind::Claude => "claude",
            ClientKind::ClaudeCode => "claude-code",
            ClientKind::Cursor => "cursor",
            ClientKind::Vscode => "vscode",
            ClientKind::Codex => "codex",
            ClientKind::Amp => "amp",
            ClientKind::Opencode => "opencode",
            ClientKind::Goose => "goose",
            ClientKind::Letta => "letta",
            ClientKind::Github => "github",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ClientKind::Claude => "Claude",
            ClientKind::ClaudeCode => "Claude Code",
            ClientKind::Cursor => "Cursor",
            ClientKind::Vscode => "VS Code",
            ClientKind::Codex => "Codex",
            ClientKind::Amp => "Amp Code",
            ClientKind::Opencode => "OpenCode",
            ClientKind::Goose => "Goose",
            ClientKind::Letta => "Letta",
            ClientKind::Github => "GitHub",
        }
    }

    /// Project-local skills directory for this client
    pub fn local_skill_path(&self) -> &'static str {
        match self {
            ClientKind::Claude => "~/.claude/skills/",
            ClientKind::ClaudeCode => ".claude/skills/",
            ClientKind::Cursor => ".cursor/skills/",
            ClientKind::Vscode => ".vscode/skills/",
            ClientKind::Codex => ".codex/skills/",
            ClientKind::Amp => ".amp/skills/",
            ClientKind::Opencode => ".opencode/skills/",
            ClientKind::Goose => ".goose/skills/",
            ClientKind::Letta => ".letta/skills/",
            ClientKind::Github => ".github/skills/",
        }
    }

    /// Per-user skills directory for this client
    pub fn personal_skill_path(&self) -> &'static str {
        match self {
            ClientKind::Claude | ClientKind::ClaudeCode => "~/.claude/skills/",
            ClientKind::Cursor => "~/.cursor/skills/",
            ClientKind::Vscode => "~/.vscode/skills/",
            ClientKind::Codex => "~/.codex/skills/",
            ClientKind::Amp => "~/.amp/skills/",
            ClientKind::Opencode => "~/.opencode/skills/",
            ClientKind::Goose => "~/.goose/skills/",
            ClientKind::Letta => "~/.letta/skills/",
            ClientKind::Github => "~/.github/skills/",
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ClientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CLIENTS
            .iter()
            .find(|c| c.id() == s)
            .copied()
            .ok_or_else(|| format!("unknown client '{}'", s))
    }
}
