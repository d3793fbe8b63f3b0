//! Collaborators the shell calls into. The page owns routing, theming, downloads and focus;
//! the shell only asks for them.

use crate::prank::PageSurface;
use crate::theme::ThemeMode;
use std::fmt;

/// Page sections that mirror the directories under home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "about" => Some(Section::About),
            "projects" => Some(Section::Projects),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the surrounding page provides to the terminal.
///
/// Optional capabilities have no-op defaults, so a minimal host only routes,
/// themes, downloads and opens tabs.
pub trait Host {
    /// Show a section (`#about`, `#projects`, `#contact`).
    fn navigate(&mut self, section: Section);

    /// Show the landing view (clear the route).
    fn go_home(&mut self);

    fn set_theme(&mut self, mode: ThemeMode);

    fn download_resume(&mut self);

    /// Open `url` through a host-specific opener. Returns false when there is none.
    fn open_url(&mut self, _url: &str) -> bool {
        false
    }

    /// Fallback for [`Host::open_url`]: a plain new browser tab.
    fn open_new_tab(&mut self, url: &str);

    /// Bring the terminal back after navigation remounted the page.
    fn reopen_terminal(&mut self) {}

    fn focus_input(&mut self) {}

    fn blur_input(&mut self) {}

    fn scroll_to_bottom(&mut self) {}

    /// Start or stop the idle "nudge" animation on the closed terminal.
    fn set_nudging(&mut self, _on: bool) {}

    /// The page, as seen by the prank sequence.
    fn page(&mut self) -> &mut dyn PageSurface;
}
