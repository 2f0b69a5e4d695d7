//! Terminal color support detection and formatting.
//!
//! Respects the NO_COLOR environment variable and falls back to plain
//! text when stdout or stderr is not a TTY.

use std::env;
use std::io::{self, IsTerminal};

/// Color support detection and formatting
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        Self {
            enabled: Self::should_use_colors(),
        }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    fn should_use_colors() -> bool {
        if env::var("NO_COLOR").is_ok() {
            return false;
        }

        io::stderr().is_terminal() && io::stdout().is_terminal()
    }

    /// Format text in green
    pub fn green(&self, text: &str) -> String {
        self.wrap("\x1b[32m", text)
    }

    /// Format text in yellow
    pub fn yellow(&self, text: &str) -> String {
        self.wrap("\x1b[33m", text)
    }

    /// Format text in red
    pub fn red(&self, text: &str) -> String {
        self.wrap("\x1b[31m", text)
    }

    /// Format text as dim/gray
    pub fn dim(&self, text: &str) -> String {
        self.wrap("\x1b[2m", text)
    }

    /// Format text as bold
    pub fn bold(&self, text: &str) -> String {
        self.wrap("\x1b[1m", text)
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_passes_text_through() {
        let colors = ColorSupport::disabled();
        assert_eq!(colors.green("ok"), "ok");
        assert_eq!(colors.red("fail"), "fail");
        assert_eq!(colors.dim("note"), "note");
        assert_eq!(colors.bold("name"), "name");
    }

    #[test]
    fn test_enabled_wraps_with_reset() {
        let colors = ColorSupport { enabled: true };
        assert_eq!(colors.yellow("warn"), "\x1b[33mwarn\x1b[0m");
        assert!(colors.bold("name").ends_with("\x1b[0m"));
    }
}
