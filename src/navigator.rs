//! Walks the virtual filesystem and owns the current working directory.

use crate::error::{ShellError, ShellResult};
use crate::host::Section;
use crate::path_util::{self, HOME};
use crate::vfs::Node;

/// Where the page should go after a successful `cd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Home or root: show the landing view.
    Root,
    /// Inside one of the home sections.
    Section(Section),
    /// Somewhere without a page counterpart.
    Stay,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    root: Node,
    cwd: String,
}

impl Navigator {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            cwd: HOME.to_string(),
        }
    }

    /// Swaps in a freshly built tree. A cwd that no longer exists falls back to home.
    pub fn replace_tree(&mut self, root: Node) {
        self.root = root;
        if !self.resolve(&self.cwd).is_some_and(Node::is_dir) {
            tracing::debug!(cwd = %self.cwd, "cwd vanished after rebuild, returning home");
            self.cwd = HOME.to_string();
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Joins `rhs` against the cwd.
    pub fn absolute(&self, rhs: &str) -> String {
        path_util::join(&self.cwd, rhs)
    }

    /// Node at an absolute path, walking segment by segment from the root.
    pub fn resolve(&self, abs: &str) -> Option<&Node> {
        abs.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(&self.root, |node, seg| node.child(seg))
    }

    /// Sorted entry names of the directory at `abs`.
    pub fn list(&self, abs: &str) -> ShellResult<Vec<String>> {
        match self.resolve(abs) {
            Some(node) => node.names().ok_or_else(|| ShellError::NotADirectory {
                path: abs.to_string(),
            }),
            None => Err(ShellError::NotFound {
                path: abs.to_string(),
            }),
        }
    }

    /// `cd`: `None` goes home. On failure the cwd is left untouched.
    pub fn change_directory(&mut self, arg: Option<&str>) -> ShellResult<Navigation> {
        let target = match arg {
            Some(rhs) => self.absolute(rhs),
            None => HOME.to_string(),
        };
        match self.resolve(&target) {
            Some(node) if node.is_dir() => {}
            Some(_) => return Err(ShellError::NotADirectory { path: target }),
            None => return Err(ShellError::NotFound { path: target }),
        }
        let navigation = navigation_for(&target);
        tracing::debug!(from = %self.cwd, to = %target, ?navigation, "cd");
        self.cwd = target;
        Ok(navigation)
    }

    /// File content at `rhs` (relative to cwd). Retries with `.txt` appended before giving up.
    pub fn read_file(&self, rhs: &str) -> ShellResult<&str> {
        let abs = self.absolute(rhs);
        if let Some(Node::File(content)) = self.resolve(&abs) {
            return Ok(content.as_str());
        }
        if !rhs.ends_with(".txt") {
            let with_ext = self.absolute(&format!("{}.txt", rhs));
            if let Some(Node::File(content)) = self.resolve(&with_ext) {
                return Ok(content.as_str());
            }
        }
        match self.resolve(&abs) {
            Some(_) => Err(ShellError::NotAFile { path: abs }),
            None => Err(ShellError::NotFound { path: abs }),
        }
    }
}

fn navigation_for(abs: &str) -> Navigation {
    if abs == HOME || abs == "/" {
        return Navigation::Root;
    }
    abs.strip_prefix(HOME)
        .and_then(|rest| rest.strip_prefix('/'))
        .and_then(|rest| rest.split('/').next())
        .and_then(Section::from_name)
        .map_or(Navigation::Stay, Navigation::Section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{build, Project, SiteContent};

    fn navigator() -> Navigator {
        let content = SiteContent {
            bio: "hello".to_string(),
            projects: vec![Project::new("My Cool App!")],
            ..SiteContent::default()
        };
        Navigator::new(build(&content))
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(navigator().cwd(), HOME);
    }

    #[test]
    fn resolve_walks_segments() {
        let nav = navigator();
        assert!(nav.resolve("/").is_some_and(Node::is_dir));
        assert!(nav.resolve("/home/projects/my-cool-app.proj").is_some());
        assert!(nav.resolve("/home/nope").is_none());
        assert!(nav.resolve("/home/about/bio.txt/deeper").is_none());
    }

    #[test]
    fn list_home_is_sorted() {
        let nav = navigator();
        assert_eq!(nav.list(HOME).unwrap(), vec!["about", "contact", "projects"]);
        assert!(matches!(
            nav.list("/home/about/bio.txt"),
            Err(ShellError::NotADirectory { .. })
        ));
        assert!(matches!(nav.list("/missing"), Err(ShellError::NotFound { .. })));
    }

    #[test]
    fn cd_into_section_reports_navigation() {
        let mut nav = navigator();
        assert_eq!(
            nav.change_directory(Some("projects")).unwrap(),
            Navigation::Section(Section::Projects)
        );
        assert_eq!(nav.cwd(), "/home/projects");
        assert_eq!(nav.change_directory(Some("..")).unwrap(), Navigation::Root);
        assert_eq!(nav.cwd(), HOME);
    }

    #[test]
    fn cd_to_root_and_back_home() {
        let mut nav = navigator();
        assert_eq!(nav.change_directory(Some("/")).unwrap(), Navigation::Root);
        assert_eq!(nav.cwd(), "/");
        assert_eq!(nav.change_directory(None).unwrap(), Navigation::Root);
        assert_eq!(nav.cwd(), HOME);
    }

    #[test]
    fn cd_failure_keeps_cwd() {
        let mut nav = navigator();
        nav.change_directory(Some("about")).unwrap();
        assert!(nav.change_directory(Some("nowhere")).is_err());
        assert!(nav.change_directory(Some("bio.txt")).is_err());
        assert_eq!(nav.cwd(), "/home/about");
    }

    #[test]
    fn read_file_appends_txt() {
        let mut nav = navigator();
        nav.change_directory(Some("about")).unwrap();
        assert_eq!(nav.read_file("bio").unwrap(), "hello");
        assert_eq!(nav.read_file("bio.txt").unwrap(), "hello");
        assert_eq!(nav.read_file("~/about/bio").unwrap(), "hello");
        assert!(matches!(nav.read_file("bio.txt.txt"), Err(ShellError::NotFound { .. })));
        assert!(matches!(nav.read_file(".."), Err(ShellError::NotAFile { .. })));
    }

    #[test]
    fn replace_tree_resets_vanished_cwd() {
        let mut nav = navigator();
        nav.change_directory(Some("projects")).unwrap();
        nav.replace_tree(Node::empty_dir());
        assert_eq!(nav.cwd(), HOME);
    }
}
