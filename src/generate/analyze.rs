//! Source file analysis interface.
//!
//! Extracting import strings from file contents is done by the host (or a
//! parser it plugs in). Generation only needs the ordered raw imports of each
//! file.

use std::collections::HashMap;
use std::path::Path;

/// Extracts raw import strings from a source file.
pub trait FileAnalyzer {
    /// Raw imports of `file` (relative to `dir`), in source order.
    ///
    /// Must be deterministic for a given file content.
    fn analyze(&self, dir: &Path, file: &str) -> Vec<String>;
}

impl<F> FileAnalyzer for F
where
    F: Fn(&Path, &str) -> Vec<String>,
{
    fn analyze(&self, dir: &Path, file: &str) -> Vec<String> {
        self(dir, file)
    }
}

/// Imports extracted ahead of time, keyed by file path.
///
/// Files without an entry have no imports.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedImports {
    imports: HashMap<String, Vec<String>>,
}

impl PrecomputedImports {
    pub fn new() -> Self {
        PrecomputedImports::default()
    }

    /// Record the imports of a file.
    pub fn with_file(
        mut self,
        file: impl Into<String>,
        imports: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(file, imports);
        self
    }

    pub fn insert(
        &mut self,
        file: impl Into<String>,
        imports: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.imports
            .insert(file.into(), imports.into_iter().map(|i| i.into()).collect());
    }
}

impl FileAnalyzer for PrecomputedImports {
    fn analyze(&self, dir: &Path, file: &str) -> Vec<String> {
        let key = dir.join(file);
        self.imports
            .get(key.to_string_lossy().as_ref())
            .or_else(|| self.imports.get(file))
            .cloned()
            .unwrap_or_default()
    }
}
