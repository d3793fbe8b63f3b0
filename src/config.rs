//! Site configuration (`site.yaml`) and the project list (`projects.json`).

use crate::error::{ShellError, ShellResult};
use crate::shell::{ShellSettings, Who, DEFAULT_REPO_URL, DEFAULT_SHELL_NAME};
use crate::theme::ThemeMode;
use crate::vfs::{Contact, Project, SiteContent};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `user@host` shown in the prompt.
    pub who: String,
    pub shell_name: String,
    pub repo_url: String,
    pub bio: String,
    pub contact: Contact,
    /// Theme applied when the page starts.
    pub theme: Option<ThemeMode>,
    /// JSON project list, relative to the config file.
    pub projects_file: Option<PathBuf>,
    /// Projects given inline; a projects file replaces them.
    pub projects: Vec<Project>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            who: "guest@localhost".to_string(),
            shell_name: DEFAULT_SHELL_NAME.to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
            bio: String::new(),
            contact: Contact::default(),
            theme: None,
            projects_file: None,
            projects: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(source: &str) -> ShellResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: &Path) -> ShellResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| ShellError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&source)?;
        tracing::debug!(path = %path.display(), "site config loaded");
        Ok(config)
    }

    pub fn settings(&self) -> ShellSettings {
        ShellSettings {
            who: Who::parse(&self.who),
            shell_name: self.shell_name.clone(),
            repo_url: self.repo_url.clone(),
        }
    }

    pub fn content(&self) -> SiteContent {
        SiteContent {
            bio: self.bio.clone(),
            contact: self.contact.clone(),
            projects: self.projects.clone(),
        }
    }

    /// The projects file, resolved against the directory holding `config_path`.
    pub fn projects_path(&self, config_path: &Path) -> Option<PathBuf> {
        let file = self.projects_file.as_ref()?;
        if file.is_absolute() {
            return Some(file.clone());
        }
        let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        Some(dir.join(file))
    }
}

/// Parses a `projects.json` document: an array of project records.
pub fn parse_projects(source: &str) -> ShellResult<Vec<Project>> {
    Ok(serde_json::from_str(source)?)
}

/// Reads the project list. A missing or malformed file yields no projects.
pub fn load_projects(path: &Path) -> Vec<Project> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read projects");
            return Vec::new();
        }
    };
    match parse_projects(&source) {
        Ok(projects) => {
            tracing::info!(path = %path.display(), count = projects.len(), "projects loaded");
            projects
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse projects");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SiteConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        let settings = config.settings();
        assert_eq!(settings.who.user, "guest");
        assert_eq!(settings.who.host, "localhost");
        assert_eq!(settings.shell_name, "-zsh");
    }

    #[test]
    fn yaml_fields() {
        let config = SiteConfig::from_yaml(
            r#"
who: guest@gutierrezivan
theme: dark-purple
bio: |
  Line one.
  Line two.
contact:
  email: ivan@example.com
projects_file: projects.json
"#,
        )
        .unwrap();
        assert_eq!(config.settings().who.host, "gutierrezivan");
        assert_eq!(config.theme, Some(ThemeMode::DarkPurple));
        assert_eq!(config.content().bio, "Line one.\nLine two.\n");
        assert_eq!(config.contact.email, "ivan@example.com");
        assert_eq!(config.contact.github, "");
        assert_eq!(
            config.projects_path(Path::new("data/site.yaml")),
            Some(PathBuf::from("data/projects.json"))
        );
    }

    #[test]
    fn prompt_comes_from_who_not_contact_email() {
        let config = SiteConfig::from_yaml("who: ivan@folio\ncontact:\n  email: me@example.com\n").unwrap();
        let who = config.settings().who;
        assert_eq!((who.user.as_str(), who.host.as_str()), ("ivan", "folio"));
        assert_eq!(config.contact.email, "me@example.com");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = SiteConfig::from_yaml("who: [unclosed").unwrap_err();
        assert!(matches!(err, ShellError::Yaml(_)));
    }

    #[test]
    fn missing_config_is_io_error() {
        let err = SiteConfig::load(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, ShellError::Io { .. }));
    }

    #[test]
    fn projects_json_camel_case() {
        let projects = parse_projects(
            r#"[{"title": "Pong", "liveUrl": "https://pong.example", "tags": ["rust", "game"]}]"#,
        )
        .unwrap();
        assert_eq!(projects[0].live_url.as_deref(), Some("https://pong.example"));
        assert_eq!(projects[0].file_name(), "pong.proj");
    }

    #[test]
    fn unreadable_projects_degrade_to_empty() {
        assert!(load_projects(Path::new("does/not/exist.json")).is_empty());
        assert!(parse_projects("{not json").is_err());
    }
}
