//! Tab completion for command names and, after `cd`/`ls`/`cat`, for paths.

use crate::commands::Command;
use crate::navigator::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Replace the input buffer with this line.
    Replace(String),
    /// Several matches: show them, leave the buffer alone.
    Candidates(Vec<String>),
    Nothing,
}

fn pick(matches: Vec<String>, single: impl FnOnce(&str) -> String) -> Completion {
    match matches.len() {
        0 => Completion::Nothing,
        1 => Completion::Replace(single(&matches[0])),
        _ => Completion::Candidates(matches),
    }
}

/// Completes `line` against the command registry and the filesystem under the cwd.
pub fn complete(line: &str, nav: &Navigator) -> Completion {
    let mut parts: Vec<&str> = line.split_whitespace().collect();
    // A trailing separator starts a new, still empty, token.
    if parts.is_empty() || line.ends_with(char::is_whitespace) {
        parts.push("");
    }
    match parts.as_slice() {
        [head] => {
            let matches = Command::names()
                .filter(|n| n.starts_with(head))
                .map(str::to_string)
                .collect();
            pick(matches, |name| format!("{} ", name))
        }
        [head, partial] if Command::from_name(head).is_some_and(Command::takes_path) => {
            complete_path(head, partial, nav)
        }
        _ => Completion::Nothing,
    }
}

fn complete_path(head: &str, partial: &str, nav: &Navigator) -> Completion {
    let (dir_part, prefix) = match partial.rfind('/') {
        Some(i) => (&partial[..=i], &partial[i + 1..]),
        None => ("", partial),
    };
    let base = if dir_part.is_empty() {
        nav.cwd().to_string()
    } else {
        // A prefix made only of slashes still means the root.
        let dir = dir_part.trim_end_matches('/');
        nav.absolute(if dir.is_empty() { "/" } else { dir })
    };
    let matches = nav
        .list(&base)
        .unwrap_or_default()
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect();
    pick(matches, |name| format!("{} {}{} ", head, dir_part, name))
}
