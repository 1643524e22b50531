//! jsrules - BUILD rule generation and dependency resolution for JavaScript
//!
//! This crate turns the files of a JavaScript or TypeScript source tree into
//! build target descriptors and resolves their import statements into
//! dependency labels, either pointing at other targets in the repository or
//! at packages in an external npm repository.
//!
//! Generation and resolution are separate phases: every directory is
//! generated and indexed before any directory is resolved.

pub mod core;
pub mod generate;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test utilities for jsrules unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides index builders and multi-directory fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{
    build_file::BuildFile, import_spec::ImportSpec, label::Label, target::Target,
    target::TargetKind,
};

pub use generate::{generate_rules, GenerateArgs, GenerateResult};
pub use ops::{update_tree, DirectoryUpdate};
pub use resolver::{ImportIndex, ResolveError, Resolver, RuleIndex};
pub use util::{Diagnostic, JsConfig};
