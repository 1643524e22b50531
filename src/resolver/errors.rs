//! Resolution error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// A recoverable failure resolving one import.
///
/// These never abort a run: the import is dropped from the dependency set and
/// the error is reported through [`ResolveError::to_diagnostic`].
#[derive(Debug, Clone, Error, MietteDiagnostic, PartialEq, Eq)]
pub enum ResolveError {
    #[error("multiple rules ({first} and {second}) may be imported with {import:?} from {from}")]
    #[diagnostic(code(jsrules::resolve::ambiguous))]
    Ambiguous {
        import: String,
        from: String,
        first: String,
        second: String,
    },

    #[error("import {import} not found")]
    #[diagnostic(code(jsrules::resolve::not_found))]
    NotFound { import: String, from: String },
}

impl ResolveError {
    /// The import that failed to resolve.
    pub fn import(&self) -> &str {
        match self {
            ResolveError::Ambiguous { import, .. } | ResolveError::NotFound { import, .. } => {
                import
            }
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::Ambiguous {
                from,
                first,
                second,
                ..
            } => Diagnostic::warning(self.to_string())
                .with_target(from.clone())
                .with_context(format!("candidate {}", first))
                .with_context(format!("candidate {}", second))
                .with_suggestion(suggestions::AMBIGUOUS_IMPORT),

            ResolveError::NotFound { import, from } => {
                let diag = Diagnostic::warning(self.to_string()).with_target(from.clone());
                if import.starts_with("~/") {
                    diag.with_suggestion(suggestions::UNRESOLVED_ALIAS)
                } else {
                    diag.with_suggestion(suggestions::IMPORT_NOT_FOUND)
                }
            }
        }
    }
}
