//! Parses a shell input line into a command token and its argument, and the `rm`
//! argument into flags and targets.

use regex::Regex;
use std::sync::OnceLock;

/// Splits a line like `cat  about/bio.txt` into (command, argument).
/// The argument is every remaining whitespace-separated token joined by one space,
/// or `None` when there is nothing after the command. Returns `None` for a blank line.
pub fn split_command(line: &str) -> Option<(&str, Option<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    let rest: Vec<&str> = tokens.collect();
    let arg = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    Some((command, arg))
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?:[^\s"]+|"[^"]*")+"#).expect("static regex"))
}

/// Splits on whitespace, keeping double-quoted substrings (quotes included) inside one token.
/// `rm "my file" -f` → `["rm", "\"my file\"", "-f"]`.
pub fn tokenize_quoted(line: &str) -> Vec<String> {
    token_regex()
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Removes one leading and one trailing quote character, if present.
fn strip_quotes(token: &str) -> &str {
    let token = token
        .strip_prefix('"')
        .or_else(|| token.strip_prefix('\''))
        .unwrap_or(token);
    token
        .strip_suffix('"')
        .or_else(|| token.strip_suffix('\''))
        .unwrap_or(token)
}

/// `rm` argument split into flag tokens (leading `-`) and positional tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RmArgs {
    pub flags: Vec<String>,
    pub positionals: Vec<String>,
}

impl RmArgs {
    pub fn parse(arg: &str) -> Self {
        let (flags, positionals): (Vec<String>, Vec<String>) = tokenize_quoted(arg.trim())
            .into_iter()
            .partition(|t| t.starts_with('-'));
        Self { flags, positionals }
    }

    /// True when a short cluster (`-rf`) contains `c`, or a long flag equals `--long`.
    fn has(&self, short: &[char], long: &str) -> bool {
        self.flags.iter().any(|f| match f.strip_prefix("--") {
            Some(name) => name == long,
            None => f[1..].chars().any(|c| short.contains(&c)),
        })
    }

    pub fn force(&self) -> bool {
        self.has(&['f'], "force")
    }

    pub fn recursive(&self) -> bool {
        self.has(&['r'], "recursive")
    }

    /// Whether the command line asks to wipe the root (or home) with `--no-preserve-root`.
    pub fn is_root_nuke(&self) -> bool {
        let target = self.positionals.join(" ");
        let target = target.trim();
        let looks_like_root = matches!(target, "/" | "/*" | "~" | "~/")
            || target.trim_end_matches('/').is_empty();
        looks_like_root && self.flags.iter().any(|f| f == "--no-preserve-root")
    }

    /// Last positional token with surrounding quotes removed.
    pub fn target(&self) -> Option<&str> {
        self.positionals.last().map(|t| strip_quotes(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(
            split_command("cat about/bio.txt"),
            Some(("cat", Some("about/bio.txt".to_string())))
        );
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(
            split_command("  rm   -rf    /  "),
            Some(("rm", Some("-rf /".to_string())))
        );
    }

    #[test]
    fn test_split_command_only() {
        assert_eq!(split_command("ls"), Some(("ls", None)));
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_command(""), None);
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn test_tokenize_quoted() {
        assert_eq!(
            tokenize_quoted(r#"-f "my file.txt" other"#),
            vec!["-f", "\"my file.txt\"", "other"]
        );
        assert_eq!(tokenize_quoted(r#"a"b c"d"#), vec![r#"a"b c"d"#]);
        assert!(tokenize_quoted("   ").is_empty());
    }

    #[test]
    fn test_rm_flags_and_target() {
        let args = RmArgs::parse(r#"-rf "about""#);
        assert_eq!(args.flags, vec!["-rf"]);
        assert!(args.force());
        assert!(args.recursive());
        assert_eq!(args.target(), Some("about"));
    }

    #[test]
    fn test_rm_long_flags() {
        let args = RmArgs::parse("--force --recursive x");
        assert!(args.force());
        assert!(args.recursive());
        let args = RmArgs::parse("--no-preserve-root x");
        assert!(!args.force());
        assert!(!args.recursive());
    }

    #[test]
    fn test_rm_flags_are_case_sensitive() {
        assert!(!RmArgs::parse("-F x").force());
        assert!(!RmArgs::parse("-R x").recursive());
        assert!(RmArgs::parse("-Rr x").recursive());
    }

    #[test]
    fn test_rm_target_is_last_positional() {
        assert_eq!(RmArgs::parse("a b -f c").target(), Some("c"));
        assert_eq!(RmArgs::parse("-rf").target(), None);
    }

    #[test]
    fn test_root_nuke_detection() {
        for line in [
            "-rf / --no-preserve-root",
            "--no-preserve-root -rf /*",
            "-rf ~ --no-preserve-root",
            "-rf ~/ --no-preserve-root",
            "-rf //// --no-preserve-root",
            "-rf --no-preserve-root",
        ] {
            assert!(RmArgs::parse(line).is_root_nuke(), "{line}");
        }
        for line in ["-rf /", "-rf about --no-preserve-root", "/ --no-preserve-roots"] {
            assert!(!RmArgs::parse(line).is_root_nuke(), "{line}");
        }
    }
}
