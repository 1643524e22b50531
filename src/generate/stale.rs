//! Stale target detection.
//!
//! A previously declared target whose sources are all gone is returned as an
//! empty target of the same kind and name; the host's merge step deletes it.

use std::collections::HashSet;

use crate::core::{BuildFile, Target};

/// Find existing rules of `kinds` that none of `files` backs anymore.
///
/// Rules whose `srcs` is present but not a literal string list are left
/// alone since the files they refer to cannot be known here.
pub fn generate_empty(file: Option<&BuildFile>, files: &[String], kinds: &[&str]) -> Vec<Target> {
    let Some(file) = file else {
        return Vec::new();
    };

    let known_files: HashSet<&str> = files.iter().map(String::as_str).collect();

    file.rules
        .iter()
        .filter(|rule| kinds.contains(&rule.kind.as_str()))
        .filter(|rule| match &rule.srcs {
            None => true,
            Some(srcs) => match srcs.as_list() {
                Some(list) => !list.iter().any(|src| known_files.contains(src.as_str())),
                None => false,
            },
        })
        .map(|rule| {
            tracing::debug!("{} {} in //{} is stale", rule.kind, rule.name, file.pkg);
            Target::new(rule.kind.clone(), rule.name.clone())
        })
        .collect()
}
