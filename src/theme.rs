use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme requested from the page. `Auto` follows the system preference,
/// `Toggle` flips between light and dark and is only issued by the page itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    Pink,
    DarkPurple,
    Auto,
    Toggle,
}

impl ThemeMode {
    /// Modes the `theme` command accepts, in usage order.
    pub const SELECTABLE: [ThemeMode; 5] = [
        ThemeMode::Light,
        ThemeMode::Dark,
        ThemeMode::Pink,
        ThemeMode::DarkPurple,
        ThemeMode::Auto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Pink => "pink",
            ThemeMode::DarkPurple => "dark-purple",
            ThemeMode::Auto => "auto",
            ThemeMode::Toggle => "toggle",
        }
    }

    /// Parses a name typed at the prompt. `toggle` is not selectable from the shell.
    pub fn from_command_arg(name: &str) -> Option<Self> {
        Self::SELECTABLE.into_iter().find(|m| m.as_str() == name)
    }

    /// `light|dark|pink|dark-purple|auto`
    pub fn usage_list() -> String {
        Self::SELECTABLE
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
