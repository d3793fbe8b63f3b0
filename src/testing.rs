//! Test utilities: a host that records every call it receives.

use crate::host::{Host, Section};
use crate::page::StaticPage;
use crate::prank::PageSurface;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Navigate(Section),
    GoHome,
    Theme(ThemeMode),
    DownloadResume,
    OpenUrl(String),
    NewTab(String),
    ReopenTerminal,
    FocusInput,
    BlurInput,
    ScrollToBottom,
    Nudging(bool),
}

/// Mock host backed by a [`StaticPage`].
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    /// When set, `open_url` claims the URL instead of falling back to a new tab.
    pub handles_urls: bool,
    pub page: StaticPage,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::with_page(StaticPage::portfolio(2))
    }

    pub fn with_page(page: StaticPage) -> Self {
        Self {
            events: Vec::new(),
            handles_urls: false,
            page,
        }
    }

    /// Number of recorded events equal to `event`.
    pub fn count(&self, event: &HostEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for RecordingHost {
    fn navigate(&mut self, section: Section) {
        self.events.push(HostEvent::Navigate(section));
    }

    fn go_home(&mut self) {
        self.events.push(HostEvent::GoHome);
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.events.push(HostEvent::Theme(mode));
    }

    fn download_resume(&mut self) {
        self.events.push(HostEvent::DownloadResume);
    }

    fn open_url(&mut self, url: &str) -> bool {
        if self.handles_urls {
            self.events.push(HostEvent::OpenUrl(url.to_string()));
        }
        self.handles_urls
    }

    fn open_new_tab(&mut self, url: &str) {
        self.events.push(HostEvent::NewTab(url.to_string()));
    }

    fn reopen_terminal(&mut self) {
        self.events.push(HostEvent::ReopenTerminal);
    }

    fn focus_input(&mut self) {
        self.events.push(HostEvent::FocusInput);
    }

    fn blur_input(&mut self) {
        self.events.push(HostEvent::BlurInput);
    }

    fn scroll_to_bottom(&mut self) {
        self.events.push(HostEvent::ScrollToBottom);
    }

    fn set_nudging(&mut self, on: bool) {
        self.events.push(HostEvent::Nudging(on));
    }

    fn page(&mut self) -> &mut dyn PageSurface {
        &mut self.page
    }
}
