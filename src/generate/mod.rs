//! Rule generation for one directory.
//!
//! Every file in a directory is classified into a target kind and turned into
//! a target descriptor carrying its raw imports. Existing targets whose
//! sources disappeared are reported as empty so the host can delete them.
//! No index lookups happen here; resolution is a separate phase.

pub mod analyze;
pub mod classify;
pub mod stale;

use std::path::Path;

pub use analyze::{FileAnalyzer, PrecomputedImports};
pub use classify::{classify_file, target_name, FileClass};
pub use stale::generate_empty;

use crate::core::target::{JEST_TEST, JS_IMPORT, TS_PROJECT};
use crate::core::{BuildFile, Target, TargetKind};
use crate::util::JsConfig;

/// Inputs for generating the rules of one directory.
#[derive(Debug, Clone, Copy)]
pub struct GenerateArgs<'a> {
    /// Effective configuration for this directory
    pub config: &'a JsConfig,

    /// Absolute path of the directory
    pub dir: &'a Path,

    /// Package path relative to the repository root, empty for the root
    pub rel: &'a str,

    /// Files present on disk
    pub regular_files: &'a [String],

    /// Files produced by other rules in this directory
    pub gen_files: &'a [String],

    /// The directory's existing build file, if any
    pub file: Option<&'a BuildFile>,
}

/// Generated targets for one directory.
///
/// `gen` and `imports` are parallel: `imports[i]` holds the raw imports of
/// `gen[i]`, empty for passthrough targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    pub gen: Vec<Target>,
    pub imports: Vec<Vec<String>>,

    /// Existing targets with no remaining sources, as empty targets
    pub empty: Vec<Target>,
}

impl GenerateResult {
    /// Iterate over generated targets with their raw imports.
    pub fn targets(&self) -> impl Iterator<Item = (&Target, &[String])> {
        self.gen
            .iter()
            .zip(self.imports.iter().map(Vec::as_slice))
    }

    fn push(&mut self, target: Target, imports: Vec<String>) {
        self.gen.push(target);
        self.imports.push(imports);
    }
}

/// Generate targets for the files of one directory.
pub fn generate_rules(args: &GenerateArgs<'_>, analyzer: &dyn FileAnalyzer) -> GenerateResult {
    let config = args.config;
    let mut result = GenerateResult::default();
    let mut source_files = Vec::new();
    let mut import_files = Vec::new();

    for f in args.regular_files.iter().chain(args.gen_files) {
        let kind = match classify_file(f, config) {
            FileClass::Passthrough => {
                import_files.push(f.clone());
                continue;
            }
            FileClass::Import => TargetKind::Import,
            FileClass::Source(kind) => kind,
        };

        let mut target = Target::new(kind.rule_kind(&config.library_kind), target_name(f, kind))
            .with_srcs([f.as_str()]);
        if kind.is_public() {
            target = target.with_public_visibility();
        }

        let imports = if kind.resolves_imports() {
            source_files.push(f.clone());
            analyzer.analyze(args.dir, f)
        } else {
            import_files.push(f.clone());
            Vec::new()
        };
        result.push(target, imports);
    }

    let source_kinds = [config.library_kind.as_str(), JEST_TEST, TS_PROJECT];
    result.empty = generate_empty(args.file, &source_files, &source_kinds);

    if !config.import_extensions.is_empty() {
        result
            .empty
            .extend(generate_empty(args.file, &import_files, &[JS_IMPORT]));
    }

    tracing::debug!(
        "generated {} targets in //{} ({} stale)",
        result.gen.len(),
        args.rel,
        result.empty.len()
    );

    result
}
