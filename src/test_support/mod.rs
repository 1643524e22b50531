//! Test utilities for unit tests.
//!
//! Provides builders for import indexes and small helpers for file lists, so
//! tests can describe a repository without spelling out every `IndexEntry`.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{files, IndexBuilder};
//!
//! let index = IndexBuilder::new()
//!     .target("web", "ts_project", "b", "b.ts")
//!     .build();
//! let regular = files(&["a.ts", "b.ts"]);
//! ```

pub mod fixtures;

pub use fixtures::*;

use crate::core::Target;
use crate::resolver::RuleIndex;

/// Turn string literals into an owned file list.
pub fn files(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Builder for a [`RuleIndex`] populated with single-source targets.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    index: RuleIndex,
}

impl IndexBuilder {
    pub fn new() -> Self {
        IndexBuilder::default()
    }

    /// Index a target of `kind` named `name` in `pkg`, backed by `src`.
    pub fn target(mut self, pkg: &str, kind: &str, name: &str, src: &str) -> Self {
        let target = Target::new(kind, name).with_srcs([src]);
        self.index.add_target(&target, pkg);
        self
    }

    pub fn build(self) -> RuleIndex {
        self.index
    }
}
