//! One terminal session: scrollback, input line, history, cwd, overlay state and every
//! deferred effect (prank steps, focus, scroll, idle nudge) on a virtual clock.
//!
//! The shell never blocks and never fails: the host feeds it lines, keys and elapsed
//! time, and reads back lines and the input buffer.

mod dispatch;

use crate::completion::{self, Completion};
use crate::history::{History, Recall};
use crate::host::Host;
use crate::navigator::Navigator;
use crate::output::Scrollback;
use crate::path_util::to_display;
use crate::prank::{PrankSequencer, PrankState, PrankStep};
use crate::scheduler::{Scheduler, Scope, TaskId};
use crate::vfs::{self, Project, SiteContent};
use std::ops::Range;
use std::time::Duration;

pub const GREETING: &str = "Type 'help' to get started.";
pub const DEFAULT_REPO_URL: &str = "https://github.com/ivanharvard/gutierrezivan";
pub const DEFAULT_SHELL_NAME: &str = "-zsh";

/// Delay before focusing the input after the overlay opens.
pub const FOCUS_DELAY: Duration = Duration::from_millis(120);
/// Delay before bringing the terminal back after a section navigation.
pub const REOPEN_DELAY: Duration = Duration::from_millis(100);
/// Focus delay used after a reopen; navigation needs a little longer to settle.
pub const REOPEN_FOCUS_DELAY: Duration = Duration::from_millis(220);
/// Closed terminal idle time after which it nudges.
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(6000);
/// Period of the idle check.
pub const NUDGE_TICK: Duration = Duration::from_millis(2000);
pub const NUDGE_DURATION: Duration = Duration::from_millis(800);

/// `user@host` shown in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Who {
    pub user: String,
    pub host: String,
}

impl Default for Who {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "localhost".to_string(),
        }
    }
}

impl Who {
    /// Splits `guest@example` into user and host; missing halves get the defaults.
    pub fn parse(who: &str) -> Self {
        let default = Self::default();
        let (user, host) = who.split_once('@').unwrap_or((who, ""));
        Self {
            user: if user.is_empty() { default.user } else { user.to_string() },
            host: if host.is_empty() { default.host } else { host.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub who: Who,
    /// Name used in "command not found" messages.
    pub shell_name: String,
    /// Opened by `see-code`.
    pub repo_url: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            who: Who::default(),
            shell_name: DEFAULT_SHELL_NAME.to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Tab,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }

    fn is_clear_screen(&self) -> bool {
        (self.ctrl || self.meta) && matches!(self.key, Key::Char('l') | Key::Char('L'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    PrankStep,
    ReopenTerminal,
    FocusInput,
    ScrollToBottom,
    NudgeCheck,
    EndNudge,
}

pub struct Shell<H: Host> {
    host: H,
    settings: ShellSettings,
    content: SiteContent,
    nav: Navigator,
    output: Scrollback,
    input: String,
    history: History,
    scheduler: Scheduler<Task>,
    prank: Option<PrankSequencer>,
    open: bool,
    nudging: bool,
    last_interaction: Duration,
    pending_scroll: Option<TaskId>,
}

impl<H: Host> Shell<H> {
    pub fn new(settings: ShellSettings, content: SiteContent, host: H) -> Self {
        let nav = Navigator::new(vfs::build(&content));
        let mut scheduler = Scheduler::new();
        scheduler.schedule(NUDGE_TICK, Scope::Session, Task::NudgeCheck);
        let mut output = Scrollback::new();
        output.print(GREETING);
        Self {
            host,
            settings,
            content,
            nav,
            output,
            input: String::new(),
            history: History::new(),
            scheduler,
            prank: None,
            open: false,
            nudging: false,
            last_interaction: Duration::ZERO,
            pending_scroll: None,
        }
    }

    /// Replaces the project list and rebuilds the filesystem.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.content.projects = projects;
        self.nav.replace_tree(vfs::build(&self.content));
        tracing::debug!(projects = self.content.projects.len(), "filesystem rebuilt");
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn lines(&self) -> &[String] {
        self.output.lines()
    }

    pub fn output(&self) -> &Scrollback {
        &self.output
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn cwd(&self) -> &str {
        self.nav.cwd()
    }

    /// `guest@localhost ~ %`
    pub fn prompt(&self) -> String {
        format!(
            "{}@{} {} %",
            self.settings.who.user,
            self.settings.who.host,
            to_display(self.nav.cwd())
        )
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_nudging(&self) -> bool {
        self.nudging
    }

    /// State of the running prank, if any.
    pub fn prank_state(&self) -> Option<PrankState> {
        self.prank.as_ref().map(PrankSequencer::state)
    }

    /// Virtual time since the session started.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Whether anything other than the idle check is still scheduled.
    pub fn has_pending_work(&self) -> bool {
        self.prank.is_some() || self.scheduler.any(|t| *t != Task::NudgeCheck)
    }

    fn touch(&mut self) {
        self.last_interaction = self.scheduler.now();
    }

    fn print(&mut self, line: impl Into<String>) {
        self.output.print(line);
        self.request_scroll();
    }

    fn clear(&mut self) {
        self.output.clear();
    }

    fn request_scroll(&mut self) {
        if !self.open {
            return;
        }
        if self.pending_scroll.is_some_and(|id| self.scheduler.is_pending(id)) {
            return;
        }
        let id = self
            .scheduler
            .schedule(Duration::ZERO, Scope::Overlay, Task::ScrollToBottom);
        self.pending_scroll = Some(id);
    }

    /// Runs the input line and empties the input buffer.
    pub fn submit(&mut self, raw: &str) {
        self.touch();
        self.execute(raw);
        self.input.clear();
    }

    /// Echoes the prompt and the line, records it in history and runs it.
    pub fn execute(&mut self, raw: &str) {
        let trimmed = raw.trim();
        let echo = format!("{} {}", self.prompt(), trimmed);
        self.print(echo);
        if trimmed.is_empty() {
            return;
        }
        self.history.push(trimmed);
        self.dispatch(trimmed);
    }

    /// History recall, completion and clear-screen. Returns true when the key was consumed.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        self.touch();
        if event.is_clear_screen() {
            self.clear();
            return true;
        }
        match event.key {
            Key::ArrowUp => {
                if let Some(entry) = self.history.up() {
                    self.input = entry.to_string();
                }
                true
            }
            Key::ArrowDown => {
                match self.history.down() {
                    Recall::Unchanged => {}
                    Recall::Entry(entry) => self.input = entry.to_string(),
                    Recall::Cleared => self.input.clear(),
                }
                true
            }
            Key::Tab => {
                match completion::complete(&self.input, &self.nav) {
                    Completion::Replace(line) => self.input = line,
                    Completion::Candidates(names) => self.print(names.join("  ")),
                    Completion::Nothing => {}
                }
                true
            }
            Key::Char(_) | Key::Other => false,
        }
    }

    /// Inserts `text` over the byte range `selection` of the input and returns the new
    /// cursor position. Out-of-range or mid-character offsets snap to the end of the input.
    pub fn paste(&mut self, text: &str, selection: Range<usize>) -> usize {
        self.touch();
        let len = self.input.len();
        let snap = |i: usize| {
            if i <= len && self.input.is_char_boundary(i) {
                i
            } else {
                len
            }
        };
        let start = snap(selection.start);
        let end = snap(selection.end).max(start);
        self.input.replace_range(start..end, text);
        start + text.len()
    }

    /// Shows the overlay and focuses the input shortly after.
    pub fn open(&mut self) {
        self.touch();
        if self.open {
            return;
        }
        self.open = true;
        self.scheduler
            .schedule(FOCUS_DELAY, Scope::Overlay, Task::FocusInput);
    }

    /// Hides the overlay. Pending focus, scroll and reopen work is dropped; a running prank
    /// keeps going.
    pub fn close(&mut self) {
        self.touch();
        if !self.open {
            return;
        }
        self.open = false;
        self.host.blur_input();
        let dropped = self.scheduler.cancel_scope(Scope::Overlay);
        self.pending_scroll = None;
        tracing::debug!(dropped, "terminal closed");
    }

    /// Moves the clock forward by `elapsed`, running everything that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.scheduler.now() + elapsed;
        while let Some((_, task)) = self.scheduler.pop_due(target) {
            self.run_task(task);
        }
        self.scheduler.set_now(target);
    }

    fn start_prank(&mut self) {
        if self.prank.is_some() {
            tracing::debug!("prank already running, ignoring");
            return;
        }
        tracing::info!("root wipe requested, starting prank");
        self.clear();
        self.prank = Some(PrankSequencer::new());
        self.scheduler
            .schedule(crate::prank::DELETE_TICK, Scope::Session, Task::PrankStep);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::PrankStep => {
                let Some(seq) = self.prank.as_mut() else {
                    return;
                };
                match seq.step(self.host.page(), &mut self.output) {
                    PrankStep::Continue(delay) => {
                        self.scheduler.schedule(delay, Scope::Session, Task::PrankStep);
                    }
                    PrankStep::Finished => {
                        tracing::info!("prank finished, page restored");
                        self.prank = None;
                    }
                }
                self.request_scroll();
            }
            Task::ReopenTerminal => {
                self.host.reopen_terminal();
                self.open();
                self.scheduler
                    .schedule(REOPEN_FOCUS_DELAY, Scope::Overlay, Task::FocusInput);
            }
            Task::FocusInput => {
                self.host.focus_input();
                self.host.scroll_to_bottom();
            }
            Task::ScrollToBottom => {
                self.pending_scroll = None;
                self.host.scroll_to_bottom();
            }
            Task::NudgeCheck => {
                let now = self.scheduler.now();
                if !self.open && now.saturating_sub(self.last_interaction) > IDLE_TIMEOUT {
                    self.nudging = true;
                    self.host.set_nudging(true);
                    self.scheduler
                        .schedule(NUDGE_DURATION, Scope::Session, Task::EndNudge);
                    self.last_interaction = now;
                }
                self.scheduler
                    .schedule(NUDGE_TICK, Scope::Session, Task::NudgeCheck);
            }
            Task::EndNudge => {
                self.nudging = false;
                self.host.set_nudging(false);
            }
        }
    }
}
