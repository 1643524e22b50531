//! The import index - which targets can satisfy which imports.
//!
//! The index is built by the host before any directory is resolved and is
//! read-only afterwards. [`ImportIndex`] is the query interface the resolver
//! depends on; [`RuleIndex`] is a simple in-memory implementation.

use std::collections::HashMap;

use crate::core::{ImportSpec, Label, Language, Target};
use crate::util::paths;

/// A target known to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Absolute label of the target
    pub label: Label,

    /// Rule kind of the target
    pub kind: String,

    /// Import specifications the target satisfies
    pub imports: Vec<ImportSpec>,
}

impl IndexEntry {
    pub fn new(label: Label, kind: impl Into<String>, imports: Vec<ImportSpec>) -> Self {
        IndexEntry {
            label,
            kind: kind.into(),
            imports,
        }
    }

    /// Check whether importing this entry from `from` would be a self-import.
    pub fn is_self_import(&self, from: &Label) -> bool {
        self.label.same_target(from)
    }
}

/// Read-only query interface over the project-wide import index.
///
/// Implementations must be safe to share between threads: independent
/// directories may be resolved concurrently against one index.
pub trait ImportIndex: Sync {
    /// Find all entries that can be imported with `spec` from a rule of
    /// language `lang`. Order is unspecified.
    fn find_by_import(&self, spec: &ImportSpec, lang: Language) -> Vec<&IndexEntry>;
}

/// Compute the import specifications a generated target exposes.
///
/// Each source is importable by its package-relative path without the
/// extension, lower-cased: `Button.vue` in `web/ui` is `web/ui/button`.
pub fn imports(target: &Target, pkg: &str) -> Vec<ImportSpec> {
    target
        .srcs()
        .iter()
        .map(|src| {
            let imp = paths::join(pkg, paths::without_extension(src));
            ImportSpec::js(imp.to_lowercase())
        })
        .collect()
}

/// In-memory import index.
///
/// Lookups are case-insensitive, matching the lower-cased keys produced by
/// [`imports`].
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    entries: Vec<IndexEntry>,
    by_import: HashMap<ImportSpec, Vec<usize>>,
}

impl RuleIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        RuleIndex::default()
    }

    /// Add an entry under each of its import specifications.
    pub fn add(&mut self, entry: IndexEntry) {
        let idx = self.entries.len();
        for spec in &entry.imports {
            let key = ImportSpec::new(spec.lang, spec.imp.to_lowercase());
            let slots = self.by_import.entry(key).or_default();
            if !slots.contains(&idx) {
                slots.push(idx);
            }
        }
        self.entries.push(entry);
    }

    /// Index a generated target living in package `pkg`.
    pub fn add_target(&mut self, target: &Target, pkg: &str) {
        let label = Label::local(pkg, target.name.clone());
        self.add(IndexEntry::new(label, target.kind.clone(), imports(target, pkg)));
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Unlike a plain key lookup, the query is lower-cased first, so `web/Button`
/// finds the entry indexed as `web/button`.
impl ImportIndex for RuleIndex {
    fn find_by_import(&self, spec: &ImportSpec, lang: Language) -> Vec<&IndexEntry> {
        if spec.lang != lang {
            return Vec::new();
        }
        let key = ImportSpec::new(spec.lang, spec.imp.to_lowercase());
        self.by_import
            .get(&key)
            .map(|slots| slots.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }
}
