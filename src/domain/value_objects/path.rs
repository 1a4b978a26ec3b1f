//! Build path helpers
//!
//! Build paths are slash-separated strings relative to the workspace root,
//! independent of the host platform's separator.

/// Join build path components, skipping empty ones and collapsing duplicate
/// separators at the seams.
pub fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim_matches('/');
        if part.is_empty() || part == "." {
            continue;
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}

/// Final component of a build path.
pub fn base(path: &str) -> &str {
    match path.rfind('/') {
        Some(slash) => &path[slash + 1..],
        None => path,
    }
}

/// Remove the extension from the final component of `path`.
///
/// The extension starts at the last `.` of the final component. A leading
/// `.` is part of the name, never an extension boundary: `.bashrc` stays
/// `.bashrc` and `.bashrc.bak` becomes `.bashrc`. Dots in directory
/// components are ignored.
pub fn strip_extension(path: &str) -> &str {
    let start = path.rfind('/').map_or(0, |slash| slash + 1);
    let name = &path[start..];
    match name.rfind('.') {
        Some(0) | None => path,
        Some(dot) => &path[..start + dot],
    }
}

/// Why a path can't name a file inside its output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEscape {
    Empty,
    Absolute,
    ParentDir,
}

impl std::fmt::Display for PathEscape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PathEscape::Empty => "path is empty",
            PathEscape::Absolute => "path is absolute",
            PathEscape::ParentDir => "path leaves the output directory",
        })
    }
}

/// Canonical form of a path that must stay inside the directory it is
/// relative to.
///
/// Empty and `.` components are folded away. Absolute paths, `..`
/// components and paths that fold to nothing are rejected.
pub fn normalize_within(path: &str) -> Result<String, PathEscape> {
    if path.starts_with('/') {
        return Err(PathEscape::Absolute);
    }
    let mut parts = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => return Err(PathEscape::ParentDir),
            part => parts.push(part),
        }
    }
    if parts.is_empty() {
        return Err(PathEscape::Empty);
    }
    Ok(parts.join("/"))
}

/// `path` relative to `root`, if `path` lies under it.
pub fn rel_to<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return Some(path);
    }
    path.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
}
