//! Import resolution.
//!
//! Turns the raw imports of a generated target into its `deps` attribute:
//! each import is normalized, looked up in the import index, and falls back
//! to an npm package label when the index has no match. The index is never
//! modified here.

pub mod config_locator;
pub mod errors;
pub mod external;
pub mod index;
pub mod lookup;
pub mod normalize;

use std::collections::BTreeSet;

pub use errors::ResolveError;
pub use index::{ImportIndex, IndexEntry, RuleIndex};
pub use lookup::{resolve_with_index, ResolutionOutcome};

use crate::core::{AttrValue, Label, Target};
use crate::util::{Diagnostic, JsConfig};

/// Resolved dependency labels of one target, kept sorted and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    deps: BTreeSet<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        DependencySet::default()
    }

    /// Add a dependency label. Returns false if it was already present.
    pub fn insert(&mut self, dep: impl Into<String>) -> bool {
        self.deps.insert(dep.into())
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// The dependencies in ascending order.
    pub fn into_sorted(self) -> Vec<String> {
        self.deps.into_iter().collect()
    }
}

/// Resolves generated targets against a read-only import index.
pub struct Resolver<'a> {
    index: &'a dyn ImportIndex,
    config: &'a JsConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a dyn ImportIndex, config: &'a JsConfig) -> Self {
        Resolver { index, config }
    }

    /// Resolve a single raw import on behalf of `from`.
    ///
    /// Returns the dependency label to record (`Ok(None)` for imports that
    /// are deliberately skipped) or the error to report.
    pub fn resolve_import(&self, raw: &str, from: &Label) -> Result<Option<String>, ResolveError> {
        let imp = normalize::normalize(self.index, raw, from);

        match resolve_with_index(self.index, &imp, from) {
            ResolutionOutcome::Resolved(label) => {
                Ok(Some(label.rel(&from.repo, &from.pkg).to_string()))
            }
            ResolutionOutcome::Skipped => Ok(None),
            ResolutionOutcome::NotFound => {
                match external::classify(&imp, &self.config.npm_repository) {
                    Some(dep) => Ok(Some(dep)),
                    None => Err(ResolveError::NotFound {
                        import: imp,
                        from: from.to_string(),
                    }),
                }
            }
            outcome @ ResolutionOutcome::Ambiguous(_) => {
                outcome.ambiguity_error(&imp, from).map_or(Ok(None), Err)
            }
        }
    }

    /// Resolve all raw imports of `target` into its `deps` attribute.
    ///
    /// Any previous `deps` are replaced; the attribute is omitted when nothing
    /// resolves. Test targets also get a `config` attribute pointing at the
    /// nearest `jest.config`. Problems with individual imports are logged and
    /// returned; they never stop the rest of the target from resolving.
    pub fn resolve(&self, target: &mut Target, imports: &[String], from: &Label) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut deps = DependencySet::new();

        target.del_attr("deps");

        for raw in imports {
            match self.resolve_import(raw, from) {
                Ok(Some(dep)) => {
                    deps.insert(dep);
                }
                Ok(None) => {}
                Err(e) => {
                    let diag = e.to_diagnostic();
                    diag.log();
                    diagnostics.push(diag);
                }
            }
        }

        if !deps.is_empty() {
            target.set_attr("deps", AttrValue::List(deps.into_sorted()));
        }

        if target.is_test() {
            match config_locator::locate(self.index, config_locator::JEST_CONFIG, from) {
                Some(config) => {
                    let config = config.rel(&from.repo, &from.pkg);
                    target.set_attr("config", AttrValue::String(config.to_string()));
                }
                None => {
                    tracing::debug!("no jest config found for {}", from);
                }
            }
        }

        diagnostics
    }
}
