//! The closed set of shell commands.

use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Clear,
    Pwd,
    Ls,
    Cd,
    Cat,
    Theme,
    Download,
    SeeCode,
    Rm,
}

impl Command {
    /// Registry order; completion candidates are listed in this order.
    pub const ALL: [Command; 10] = [
        Command::Help,
        Command::Clear,
        Command::Pwd,
        Command::Ls,
        Command::Cd,
        Command::Cat,
        Command::Theme,
        Command::Download,
        Command::SeeCode,
        Command::Rm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Pwd => "pwd",
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Cat => "cat",
            Command::Theme => "theme",
            Command::Download => "download",
            Command::SeeCode => "see-code",
            Command::Rm => "rm",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Command::name)
    }

    /// Commands whose argument is completed as a path.
    pub fn takes_path(self) -> bool {
        matches!(self, Command::Cd | Command::Ls | Command::Cat)
    }
}

/// One-line summary printed by `help`.
pub fn help_text() -> String {
    format!(
        "Commands: help, ls [path], pwd, cd [path], cat <file>, theme [{}], rm [-rf] [path], download, see-code, clear",
        ThemeMode::usage_list()
    )
}
