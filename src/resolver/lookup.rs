//! Index lookup for a single canonical import.

use crate::core::{ImportSpec, Label, Language};
use crate::resolver::errors::ResolveError;
use crate::resolver::index::ImportIndex;

/// Result of looking up one canonical import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Exactly one other target satisfies the import
    Resolved(Label),

    /// The only match is the importing target itself
    Skipped,

    /// Nothing in the index satisfies the import
    NotFound,

    /// Several targets satisfy the import
    Ambiguous(Vec<Label>),
}

impl ResolutionOutcome {
    /// Turn an ambiguous outcome into the error reported to the operator.
    pub fn ambiguity_error(&self, import: &str, from: &Label) -> Option<ResolveError> {
        match self {
            ResolutionOutcome::Ambiguous(candidates) if candidates.len() > 1 => {
                Some(ResolveError::Ambiguous {
                    import: import.to_string(),
                    from: from.to_string(),
                    first: candidates[0].to_string(),
                    second: candidates[1].to_string(),
                })
            }
            _ => None,
        }
    }
}

/// Look up a canonical import in the index on behalf of `from`.
///
/// The returned label is absolute; callers relativize it against the origin
/// package before recording it.
pub fn resolve_with_index(index: &dyn ImportIndex, imp: &str, from: &Label) -> ResolutionOutcome {
    let spec = ImportSpec::js(imp);
    let matches = index.find_by_import(&spec, Language::Js);

    match matches.as_slice() {
        [] => ResolutionOutcome::NotFound,
        [only] if only.is_self_import(from) => ResolutionOutcome::Skipped,
        [only] => ResolutionOutcome::Resolved(only.label.clone()),
        many => ResolutionOutcome::Ambiguous(many.iter().map(|e| e.label.clone()).collect()),
    }
}
