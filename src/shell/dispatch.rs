//! Per-command handlers. Every failure ends up as printed text.

use super::{Shell, Task, REOPEN_DELAY};
use crate::cmd_parser::{self, RmArgs};
use crate::commands::{self, Command};
use crate::host::Host;
use crate::navigator::Navigation;
use crate::path_util::to_display;
use crate::scheduler::Scope;
use crate::theme::ThemeMode;

impl<H: Host> Shell<H> {
    pub(super) fn dispatch(&mut self, line: &str) {
        let Some((name, arg)) = cmd_parser::split_command(line) else {
            return;
        };
        let Some(command) = Command::from_name(name) else {
            tracing::debug!(command = name, "unknown command");
            let message = format!("{}: {}: command not found", self.settings.shell_name, name);
            self.print(message);
            return;
        };
        tracing::debug!(command = command.name(), ?arg, "dispatch");
        let arg = arg.as_deref();
        match command {
            Command::Help => self.print(commands::help_text()),
            Command::Clear => self.clear(),
            Command::Pwd => {
                let cwd = to_display(self.nav.cwd());
                self.print(cwd);
            }
            Command::Ls => self.ls(arg),
            Command::Cd => self.cd(arg),
            Command::Cat => self.cat(arg),
            Command::Theme => self.theme(arg),
            Command::Download => {
                self.print("Downloading resume...");
                self.host.download_resume();
            }
            Command::SeeCode => {
                self.print("Opening source code repository...");
                let url = self.settings.repo_url.clone();
                if !self.host.open_url(&url) {
                    self.host.open_new_tab(&url);
                }
            }
            Command::Rm => self.rm(arg.unwrap_or_default()),
        }
    }

    fn ls(&mut self, arg: Option<&str>) {
        let target = self.nav.absolute(arg.unwrap_or_default());
        match self.nav.list(&target) {
            Ok(names) => self.print(names.join("  ")),
            Err(_) => {
                let message = format!(
                    "ls: {}: Not a directory (target: {})",
                    arg.unwrap_or_default(),
                    target
                );
                self.print(message);
            }
        }
    }

    fn cd(&mut self, arg: Option<&str>) {
        match self.nav.change_directory(arg) {
            Ok(Navigation::Root) => self.host.go_home(),
            Ok(Navigation::Section(section)) => {
                self.host.navigate(section);
                self.scheduler
                    .schedule(REOPEN_DELAY, Scope::Overlay, Task::ReopenTerminal);
            }
            Ok(Navigation::Stay) => {}
            Err(err) => {
                tracing::debug!(%err, "cd failed");
                let message = format!(
                    "cd: {}: No such file or directory",
                    arg.unwrap_or_default()
                );
                self.print(message);
            }
        }
    }

    fn cat(&mut self, arg: Option<&str>) {
        let Some(arg) = arg else {
            self.print("usage: cat <file>");
            return;
        };
        match self.nav.read_file(arg) {
            Ok(content) => {
                let content = content.to_string();
                self.output.print_text(&content);
                self.request_scroll();
            }
            Err(_) => {
                let message = format!("cat: {}: No such file", arg);
                self.print(message);
            }
        }
    }

    fn theme(&mut self, arg: Option<&str>) {
        match arg.and_then(ThemeMode::from_command_arg) {
            Some(mode) => self.host.set_theme(mode),
            None => {
                let usage = format!("usage: theme [{}]", ThemeMode::usage_list());
                self.print(usage);
            }
        }
    }

    fn rm(&mut self, arg: &str) {
        const USAGE: &str = "usage: rm [-rf] <file|dir>";
        if arg.trim().is_empty() {
            self.print(USAGE);
            return;
        }
        let args = RmArgs::parse(arg);
        if args.is_root_nuke() {
            self.start_prank();
            return;
        }
        let Some(target) = args.target() else {
            self.print(USAGE);
            return;
        };
        let reason = match self.nav.resolve(&self.nav.absolute(target)) {
            None if args.force() => return,
            None => "No such file or directory",
            Some(node) if node.is_dir() && !args.recursive() => "Is a directory",
            Some(_) => "Read-only file system",
        };
        let message = format!("rm: cannot remove '{}': {}", to_display(target), reason);
        self.print(message);
    }
}
