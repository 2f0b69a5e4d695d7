//! Install-command string construction.
//!
//! Builds the shell commands the UI offers for copying into a terminal.
//! Skills go through the `skills-installer` runner, plugins through
//! `claude-plugins`; the exact runner prefix depends on the user's
//! package manager.

use std::fmt;
use std::str::FromStr;

use crate::types::ClientKind;

/// Package manager used to run the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npx,
    Bun,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Command prefix that runs a package binary without installing it
    pub fn runner(&self) -> &'static str {
        match self {
            PackageManager::Npx => "npx",
            PackageManager::Bun => "bunx",
            PackageManager::Pnpm => "pnpm dlx",
            PackageManager::Yarn => "yarn dlx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Npx => "npx",
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        };
        f.write_str(name)
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npx" | "npm" => Ok(PackageManager::Npx),
            "bun" => Ok(PackageManager::Bun),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            other => Err(format!("unknown package manager '{}'", other)),
        }
    }
}

/// Build the install command for a skill
///
/// The client flag is omitted for Claude Code since that is the installer's
/// default target; `local` installs into the project directory instead of
/// the per-user skills directory.
pub fn skill_install_command(
    identifier: &str,
    client: ClientKind,
    local: bool,
    package_manager: PackageManager,
) -> String {
    let local_flag = if local { " --local" } else { "" };
    let client_flag = if client != ClientKind::ClaudeCode {
        format!(" --client {}", client.id())
    } else {
        String::new()
    };

    format!(
        "{} skills-installer install {}{}{}",
        package_manager.runner(),
        identifier,
        client_flag,
        local_flag
    )
}

/// Build the install command for a plugin, from its registry namespace
pub fn plugin_install_command(namespace: &str, name: &str) -> String {
    format!("npx claude-plugins install {}/{}", namespace, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_command_defaults() {
        let cmd = skill_install_command(
            "@obra/superpowers/brainstorming",
            ClientKind::ClaudeCode,
            false,
            PackageManager::Npx,
        );
        assert_eq!(
            cmd,
            "npx skills-installer install @obra/superpowers/brainstorming"
        );
    }

    #[test]
    fn test_skill_command_with_client_and_local() {
        let cmd = skill_install_command(
            "@obra/superpowers/brainstorming",
            ClientKind::Cursor,
            true,
            PackageManager::Npx,
        );
        assert_eq!(
            cmd,
            "npx skills-installer install @obra/superpowers/brainstorming --client cursor --local"
        );
    }

    #[test]
    fn test_skill_command_runners() {
        for (pm, prefix) in [
            (PackageManager::Bun, "bunx"),
            (PackageManager::Pnpm, "pnpm dlx"),
            (PackageManager::Yarn, "yarn dlx"),
        ] {
            let cmd = skill_install_command("@a/b/c", ClientKind::ClaudeCode, false, pm);
            assert!(cmd.starts_with(prefix), "{} should start with {}", cmd, prefix);
        }
    }

    #[test]
    fn test_plugin_command() {
        assert_eq!(
            plugin_install_command("@anthropics/claude-code-plugins", "feature-dev"),
            "npx claude-plugins install @anthropics/claude-code-plugins/feature-dev"
        );
    }

    #[test]
    fn test_package_manager_parse() {
        assert_eq!("npx".parse::<PackageManager>().unwrap(), PackageManager::Npx);
        assert_eq!("bun".parse::<PackageManager>().unwrap(), PackageManager::Bun);
        assert!("cargo".parse::<PackageManager>().is_err());
    }
}
