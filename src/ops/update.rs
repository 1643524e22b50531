//! Generate-then-resolve for whole directories.
//!
//! A run happens in two passes. First every directory is generated and the
//! generated targets are indexed; then each directory's targets are resolved
//! against that index. Once built, the index is only read, so directories can
//! be resolved in parallel.

use rayon::prelude::*;

use crate::core::{Label, Target};
use crate::generate::{generate_rules, FileAnalyzer, GenerateArgs, GenerateResult};
use crate::resolver::{ImportIndex, Resolver, RuleIndex};
use crate::util::{Diagnostic, JsConfig};

/// The outcome of updating one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryUpdate {
    /// Package path of the directory
    pub pkg: String,

    /// Generated targets with `deps` (and `config`) resolved
    pub targets: Vec<Target>,

    /// Existing targets that should be deleted
    pub empty: Vec<Target>,

    /// Problems reported while resolving
    pub diagnostics: Vec<Diagnostic>,
}

impl DirectoryUpdate {
    /// Find a generated target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }
}

/// Resolve the generated targets of one directory.
pub fn resolve_directory(
    pkg: &str,
    generated: GenerateResult,
    index: &dyn ImportIndex,
    config: &JsConfig,
) -> DirectoryUpdate {
    let resolver = Resolver::new(index, config);
    let mut diagnostics = Vec::new();

    let GenerateResult {
        gen: mut targets,
        imports,
        empty,
    } = generated;

    for (target, imports) in targets.iter_mut().zip(&imports) {
        let from = Label::local(pkg, target.name.clone());
        diagnostics.extend(resolver.resolve(target, imports, &from));
    }

    DirectoryUpdate {
        pkg: pkg.to_string(),
        targets,
        empty,
        diagnostics,
    }
}

/// Generate and resolve one directory against an existing index.
pub fn update_directory(
    args: &GenerateArgs<'_>,
    index: &dyn ImportIndex,
    analyzer: &dyn FileAnalyzer,
) -> DirectoryUpdate {
    let generated = generate_rules(args, analyzer);
    resolve_directory(args.rel, generated, index, args.config)
}

/// Generate every directory in `dirs` and index the generated targets.
///
/// This is the indexing pass that must complete before any directory is
/// resolved. The generated results are returned in the same order as `dirs`
/// so the resolve pass can reuse them without analyzing files again.
pub fn index_directories(
    dirs: &[GenerateArgs<'_>],
    analyzer: &(dyn FileAnalyzer + Sync),
) -> (RuleIndex, Vec<GenerateResult>) {
    let generated: Vec<GenerateResult> = dirs
        .par_iter()
        .map(|args| generate_rules(args, analyzer))
        .collect();

    let mut index = RuleIndex::new();
    for (args, result) in dirs.iter().zip(&generated) {
        for target in &result.gen {
            index.add_target(target, args.rel);
        }
    }
    tracing::debug!(
        "indexed {} targets from {} directories",
        index.len(),
        dirs.len()
    );
    (index, generated)
}

/// Resolve many independent directories in parallel.
///
/// `generated[i]` holds the generated result of `dirs[i]`. Results are
/// returned in the same order as `dirs`.
pub fn update_directories(
    dirs: &[GenerateArgs<'_>],
    generated: Vec<GenerateResult>,
    index: &dyn ImportIndex,
) -> Vec<DirectoryUpdate> {
    dirs.par_iter()
        .zip(generated.into_par_iter())
        .map(|(args, result)| resolve_directory(args.rel, result, index, args.config))
        .collect()
}

/// Run both passes over a whole tree.
pub fn update_tree(
    dirs: &[GenerateArgs<'_>],
    analyzer: &(dyn FileAnalyzer + Sync),
) -> Vec<DirectoryUpdate> {
    let (index, generated) = index_directories(dirs, analyzer);
    update_directories(dirs, generated, &index)
}
