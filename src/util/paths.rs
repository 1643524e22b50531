//! Lexical path helpers for `/`-separated package paths.
//!
//! Package paths and canonical imports are repository-relative strings, not
//! filesystem paths. Joining is purely lexical: no I/O, no symlink handling.

use std::path::{Component, Path};

use path_clean::PathClean;

/// The parent of the repository root. Upward searches stop here.
pub const ROOT_SENTINEL: &str = "..";

/// Join two `/`-separated paths and clean the result.
///
/// Empty elements are ignored, `.` segments are dropped and `..` segments
/// consume their parent. A path that cleans to nothing becomes `"."`, while
/// climbing above the root keeps the leading `..`:
///
/// ```
/// use jsrules::util::paths::join;
///
/// assert_eq!(join("a/b", "../c"), "a/c");
/// assert_eq!(join("a", ".."), ".");
/// assert_eq!(join(".", ".."), "..");
/// assert_eq!(join("", "./foo"), "foo");
/// ```
pub fn join(base: &str, rel: &str) -> String {
    let base = base.trim_start_matches('/');
    let rel = rel.trim_start_matches('/');
    let joined = match (base.is_empty(), rel.is_empty()) {
        (true, true) => return ".".to_string(),
        (true, false) => Path::new(rel).to_path_buf(),
        (false, true) => Path::new(base).to_path_buf(),
        (false, false) => Path::new(base).join(rel),
    };
    to_slash(&joined.clean())
}

/// Whether a cleaned path escapes the repository root.
pub fn escapes_root(path: &str) -> bool {
    path == ROOT_SENTINEL || path.starts_with("../")
}

/// Base name of a `/`-separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension of the base name including the dot, or `""` when there is none.
pub fn extension(path: &str) -> &str {
    let base = base_name(path);
    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}

/// Strip the extension (as returned by [`extension`]) from a path.
pub fn without_extension(path: &str) -> &str {
    &path[..path.len() - extension(path).len()]
}

fn to_slash(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir => Some(".".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
