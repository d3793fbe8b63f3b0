//! In-memory directory tree built from the portfolio's content.
//!
//! Layout:
//! ```text
//! /
//! └── home
//!     ├── about/bio.txt
//!     ├── contact/{email,resume,github,linkedin}.txt
//!     └── projects/<slug>.proj
//! ```
//! The tree is derived data: rebuild it whenever the content changes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Suffix of every project file.
pub const PROJECT_SUFFIX: &str = ".proj";

/// One node of the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Children by name; iteration order is the sorted listing order.
    Dir(BTreeMap<String, Node>),
    /// Immutable text content.
    File(String),
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Dir(BTreeMap::new())
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File(content.into())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    /// Child by name; `None` for files and missing entries.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Dir(entries) => entries.get(name),
            Node::File(_) => None,
        }
    }

    /// Sorted entry names of a directory.
    pub fn names(&self) -> Option<Vec<String>> {
        match self {
            Node::Dir(entries) => Some(entries.keys().cloned().collect()),
            Node::File(_) => None,
        }
    }

    fn insert(&mut self, name: impl Into<String>, node: Node) {
        if let Node::Dir(entries) = self {
            entries.insert(name.into(), node);
        }
    }
}

/// A project record as published in `projects.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Project {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// File name under `~/projects`.
    pub fn file_name(&self) -> String {
        let slug = slugify(&self.title);
        let stem = if slug.is_empty() { "project" } else { slug.as_str() };
        format!("{}{}", stem, PROJECT_SUFFIX)
    }

    /// File body: one `Key: value` line per present field.
    pub fn body(&self) -> String {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }

        let mut lines = Vec::new();
        if !self.title.trim().is_empty() {
            lines.push(format!("Title: {}", self.title));
        }
        if let Some(blurb) = present(&self.blurb) {
            lines.push(format!("Blurb: {}", blurb));
        }
        if let Some(live) = present(&self.live_url) {
            lines.push(format!("Live: {}", live));
        }
        if let Some(code) = present(&self.code_url) {
            lines.push(format!("Code: {}", code));
        }
        if let Some(tags) = self.tags.as_ref().filter(|t| !t.is_empty()) {
            lines.push(format!("Tags: {}", tags.join(", ")));
        }
        if lines.is_empty() {
            return self.file_name();
        }
        lines.join("\n")
    }
}

/// Contact fields shown under `~/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
}

/// Everything the tree is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContent {
    pub bio: String,
    pub contact: Contact,
    pub projects: Vec<Project>,
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex"))
}

/// Lowercases, collapses every run of non-alphanumerics into one `-`, trims `-` at both ends.
/// `slugify("My Cool App!")` → `"my-cool-app"`.
pub fn slugify(title: &str) -> String {
    slug_regex()
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Builds the whole tree. Same content always yields an equal tree.
pub fn build(content: &SiteContent) -> Node {
    let mut about = Node::empty_dir();
    about.insert("bio.txt", Node::file(content.bio.clone()));

    let c = &content.contact;
    let mut contact = Node::empty_dir();
    contact.insert("email.txt", Node::file(c.email.clone()));
    contact.insert("resume.txt", Node::file(c.resume.clone()));
    contact.insert("github.txt", Node::file(c.github.clone()));
    contact.insert("linkedin.txt", Node::file(c.linkedin.clone()));

    let mut projects = Node::empty_dir();
    for project in &content.projects {
        projects.insert(project.file_name(), Node::file(project.body()));
    }

    let mut home = Node::empty_dir();
    home.insert("about", about);
    home.insert("contact", contact);
    home.insert("projects", projects);

    let mut root = Node::empty_dir();
    root.insert("home", home);
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> SiteContent {
        SiteContent {
            bio: "I build things.".to_string(),
            contact: Contact {
                email: "me@example.com".to_string(),
                ..Contact::default()
            },
            projects: vec![
                Project {
                    blurb: Some("A very cool app".to_string()),
                    tags: Some(vec!["rust".to_string(), "wasm".to_string()]),
                    ..Project::new("My Cool App!")
                },
                Project::new("Tiny"),
            ],
        }
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("My Cool App!"), "my-cool-app");
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
        assert_eq!(slugify("C++ & Rust 2"), "c-rust-2");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn file_name_falls_back_to_project() {
        assert_eq!(Project::new("My Cool App!").file_name(), "my-cool-app.proj");
        assert_eq!(Project::new("???").file_name(), "project.proj");
    }

    #[test]
    fn body_lists_present_fields() {
        let p = Project {
            blurb: Some("blurb".to_string()),
            live_url: Some("https://live".to_string()),
            code_url: Some(String::new()),
            tags: Some(vec!["a".to_string(), "b".to_string()]),
            ..Project::new("App")
        };
        assert_eq!(p.body(), "Title: App\nBlurb: blurb\nLive: https://live\nTags: a, b");
    }

    #[test]
    fn body_with_title_only() {
        assert_eq!(Project::new("Tiny").body(), "Title: Tiny");
        assert_eq!(Project::new("").body(), "project.proj");
    }

    #[test]
    fn build_has_fixed_layout() {
        let root = build(&sample());
        assert_eq!(root.names(), Some(vec!["home".to_string()]));
        let home = root.child("home").unwrap();
        assert_eq!(
            home.names(),
            Some(vec!["about".to_string(), "contact".to_string(), "projects".to_string()])
        );
        let projects = home.child("projects").unwrap();
        assert_eq!(
            projects.names(),
            Some(vec!["my-cool-app.proj".to_string(), "tiny.proj".to_string()])
        );
        assert_eq!(
            home.child("about").and_then(|a| a.child("bio.txt")),
            Some(&Node::file("I build things."))
        );
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(build(&sample()), build(&sample()));
    }

    #[test]
    fn project_json_uses_camel_case() {
        let json = r#"{"title":"X","liveUrl":"https://x","codeUrl":"https://c","tags":["t"]}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.live_url.as_deref(), Some("https://x"));
        assert_eq!(p.code_url.as_deref(), Some("https://c"));
        assert_eq!(p.blurb, None);
    }
}
