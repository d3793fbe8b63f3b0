//! The `rm -rf / --no-preserve-root` easter egg: a timed fake wipe of the page,
//! a 404 screen, then a full restore.
//!
//! The sequencer never touches a real page. It works through [`PageSurface`], and the
//! caller schedules each [`PrankSequencer::step`] after the delay the previous step returned.

use crate::output::Scrollback;
use std::fmt;
use std::time::Duration;

/// Interval between two fake deletions.
pub const DELETE_TICK: Duration = Duration::from_millis(100);
/// Pause after the last fake deletion, before the critical ones.
pub const CRITICAL_DELAY: Duration = Duration::from_millis(300);
/// Pause between wiping the page and showing the 404 overlay.
pub const OVERLAY_DELAY: Duration = Duration::from_millis(800);
/// How long the 404 stays up before the restore starts.
pub const RESTORE_DELAY: Duration = Duration::from_millis(7000);
/// How long the "just kidding" message stays up.
pub const DONE_DELAY: Duration = Duration::from_millis(2000);

pub const FAKE_PATHS: [&str; 15] = [
    "/bin/bash",
    "/bin/zsh",
    "/usr/bin/node",
    "/usr/bin/npm",
    "/etc/passwd",
    "/etc/hosts",
    "/home/user/documents",
    "/home/user/photos",
    "/var/log/system.log",
    "/tmp/cache",
    "/Applications/Chrome.app",
    "/Applications/VSCode.app",
    "/System/Library",
    "/Library/Preferences",
    "/usr/local/bin",
];

pub const CRITICAL_PATHS: [&str; 3] = [
    "/System/Library/CoreServices",
    "/System/Library/Kernels",
    "/usr/bin/sudo",
];

pub const FAREWELL: &str = "rm: don't be silly, your files are safe :)";

/// Opaque handle of a page region (an element, in a browser host).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a removed region lived, so it can be put back exactly there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub region: RegionId,
    pub parent: RegionId,
    /// Sibling that followed the region at removal time; `None` means it was last.
    pub next_sibling: Option<RegionId>,
}

/// Text shown on the full-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMessage {
    NotFound,
    Restoring,
}

impl OverlayMessage {
    pub fn headline(self) -> &'static str {
        match self {
            OverlayMessage::NotFound => "404",
            OverlayMessage::Restoring => "just kidding!",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            OverlayMessage::NotFound => "Page not found",
            OverlayMessage::Restoring => "restoring filesystem…",
        }
    }
}

/// What the prank needs from the page.
pub trait PageSurface {
    /// Visible content regions in removal priority order.
    fn removable_regions(&self) -> Vec<RegionId>;

    /// Visible top-level regions, excluding the terminal and scripts.
    fn top_level_regions(&self) -> Vec<RegionId>;

    /// Detaches a region. `None` if it is not attached.
    fn remove(&mut self, region: &RegionId) -> Option<Placement>;

    /// Puts a region back before its recorded sibling, or last in its parent.
    fn reinsert(&mut self, placement: &Placement);

    fn show_overlay(&mut self, message: OverlayMessage);

    fn update_overlay(&mut self, message: OverlayMessage);

    fn remove_overlay(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrankState {
    /// Next entry of [`FAKE_PATHS`] to "remove".
    Deleting(usize),
    CriticalDeleting,
    ShowingOverlay,
    Restoring,
    Done,
}

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrankStep {
    /// Run the next step after this delay.
    Continue(Duration),
    Finished,
}

#[derive(Debug, Clone)]
pub struct PrankSequencer {
    state: PrankState,
    removed: Vec<Placement>,
}

impl Default for PrankSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl PrankSequencer {
    pub fn new() -> Self {
        Self {
            state: PrankState::Deleting(0),
            removed: Vec::new(),
        }
    }

    pub fn state(&self) -> PrankState {
        self.state
    }

    /// Regions currently detached by the prank.
    pub fn removed(&self) -> &[Placement] {
        &self.removed
    }

    fn detach(&mut self, page: &mut dyn PageSurface, region: &RegionId) {
        if let Some(placement) = page.remove(region) {
            self.removed.push(placement);
        }
    }

    /// Runs the current state and moves to the next one.
    pub fn step(&mut self, page: &mut dyn PageSurface, out: &mut Scrollback) -> PrankStep {
        match self.state {
            PrankState::Deleting(index) if index < FAKE_PATHS.len() => {
                out.print(format!("rm: removing '{}'", FAKE_PATHS[index]));
                if let Some(first) = page.removable_regions().into_iter().next() {
                    self.detach(page, &first);
                }
                self.state = PrankState::Deleting(index + 1);
                PrankStep::Continue(DELETE_TICK)
            }
            PrankState::Deleting(_) => {
                self.state = PrankState::CriticalDeleting;
                PrankStep::Continue(CRITICAL_DELAY)
            }
            PrankState::CriticalDeleting => {
                for path in CRITICAL_PATHS {
                    out.print(format!("rm: removing '{}'", path));
                }
                for region in page.top_level_regions() {
                    self.detach(page, &region);
                }
                self.state = PrankState::ShowingOverlay;
                PrankStep::Continue(OVERLAY_DELAY)
            }
            PrankState::ShowingOverlay => {
                page.show_overlay(OverlayMessage::NotFound);
                self.state = PrankState::Restoring;
                PrankStep::Continue(RESTORE_DELAY)
            }
            PrankState::Restoring => {
                page.update_overlay(OverlayMessage::Restoring);
                while let Some(placement) = self.removed.pop() {
                    page.reinsert(&placement);
                }
                self.state = PrankState::Done;
                PrankStep::Continue(DONE_DELAY)
            }
            PrankState::Done => {
                page.remove_overlay();
                out.clear();
                out.print(FAREWELL);
                PrankStep::Finished
            }
        }
    }
}
