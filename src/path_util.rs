//! Pure path resolution (string-only, no tree). Used by the shell for cwd, cd and completion.
//! Nothing here fails: malformed input degrades to the closest sensible absolute path.

/// Absolute path of the visitor's home directory.
pub const HOME: &str = "/home";

/// Normalizes a path into an absolute one: drops empty segments, resolves `.` and `..`.
/// `..` at the root stays at the root.
///
/// - `normalize("/tmp/../var")` → `"/var"`
/// - `normalize("a//b/./c")` → `"/a/b/c"`
/// - `normalize("/..")` → `"/"`
pub fn normalize(path: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for seg in path.split('/').filter(|p| !p.is_empty()) {
        match seg {
            "." => {}
            ".." => {
                out.pop();
            }
            _ => out.push(seg),
        }
    }
    "/".to_string() + &out.join("/")
}

/// Resolves `rhs` against the absolute path `base`.
///
/// - If `rhs` is empty, returns `base` unchanged.
/// - `~` is home, `~/x` is resolved under home.
/// - `.` is `base`; `..` from home stays at home (home has no visible parent).
/// - A leading `/` makes `rhs` absolute; anything else is appended to `base`.
///
/// # Examples
///
/// - `join("/home/about", "..")` → `"/home"`
/// - `join("/home", "..")` → `"/home"`
/// - `join("/home", "~/projects/../contact")` → `"/home/contact"`
/// - `join("/home/about", "/tmp")` → `"/tmp"`
pub fn join(base: &str, rhs: &str) -> String {
    if rhs.is_empty() {
        return base.to_string();
    }
    if rhs == "~" {
        return HOME.to_string();
    }
    if let Some(rest) = rhs.strip_prefix("~/") {
        return normalize(&format!("{}/{}", HOME, rest));
    }
    match rhs {
        "." => base.to_string(),
        ".." if base == HOME => HOME.to_string(),
        _ if rhs.starts_with('/') => normalize(rhs),
        _ => normalize(&format!("{}/{}", base, rhs)),
    }
}

/// Renders an absolute path for prompts and messages: home becomes `~`,
/// paths under home become `~/...`, everything else is returned as is.
pub fn to_display(abs: &str) -> String {
    if abs == HOME {
        return "~".to_string();
    }
    match abs.strip_prefix(HOME) {
        Some(rest) if rest.starts_with('/') => format!("~{}", rest),
        _ => abs.to_string(),
    }
}
