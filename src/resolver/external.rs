//! External package classification.
//!
//! npm packages are not part of the import index. An import the index cannot
//! resolve is assumed to name an npm package unless it looks like a path.
//! A missing local file imported without a path prefix is therefore
//! indistinguishable from a package and gets classified as one.

/// Prefixes that mark an import as a path into the source tree, following
/// Node's module resolution plus the common bundler aliases.
pub const PATH_PREFIXES: &[&str] = &["./", "/", "../", "~/", "@/", "~~/"];

/// Check whether an import names an npm package rather than a path.
pub fn is_npm_dependency(imp: &str) -> bool {
    !PATH_PREFIXES.iter().any(|prefix| imp.starts_with(prefix))
}

/// Extract the package name from a bare import.
///
/// Scoped packages keep their scope: `@scope/pkg/sub` is `@scope/pkg`.
pub fn package_name(imp: &str) -> &str {
    let mut segments = imp.splitn(3, '/');
    let first = segments.next().unwrap_or_default();

    match (first.starts_with('@'), segments.next()) {
        (true, Some(second)) if !second.is_empty() => &imp[..first.len() + 1 + second.len()],
        _ => first,
    }
}

/// Classify an unresolved import as an external dependency.
///
/// Returns the dependency label (`@npm//lodash`) or `None` when the import is
/// path-like or has no usable package name. Bare `.` and `..` name a
/// directory, never a package.
pub fn classify(imp: &str, npm_repository: &str) -> Option<String> {
    if !is_npm_dependency(imp) {
        return None;
    }
    let name = package_name(imp);
    if matches!(name, "" | "@" | "." | "..") {
        return None;
    }
    Some(format!("@{}//{}", npm_repository, name))
}
