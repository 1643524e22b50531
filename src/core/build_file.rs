//! Existing build-file state for one directory.
//!
//! The host parses build files; this module only models the parts stale
//! target detection needs: each rule's kind, name and `srcs` declaration.

use serde::{Deserialize, Serialize};

use crate::core::target::AttrValue;

/// A rule already declared in a build file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingRule {
    pub kind: String,
    pub name: String,

    /// The `srcs` declaration, `None` when the attribute is absent
    #[serde(default)]
    pub srcs: Option<AttrValue>,
}

impl ExistingRule {
    /// A rule with a literal `srcs` list.
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        srcs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        ExistingRule {
            kind: kind.into(),
            name: name.into(),
            srcs: Some(AttrValue::List(srcs.into_iter().map(|s| s.into()).collect())),
        }
    }

    /// A rule whose `srcs` is not a literal string list.
    pub fn with_expr_srcs(
        kind: impl Into<String>,
        name: impl Into<String>,
        expr: impl Into<String>,
    ) -> Self {
        ExistingRule {
            kind: kind.into(),
            name: name.into(),
            srcs: Some(AttrValue::Expr { expr: expr.into() }),
        }
    }
}

/// The rules of one directory's build file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFile {
    /// Package path of the directory, empty for the root
    #[serde(default)]
    pub pkg: String,

    #[serde(default)]
    pub rules: Vec<ExistingRule>,
}

impl BuildFile {
    pub fn new(pkg: impl Into<String>) -> Self {
        BuildFile {
            pkg: pkg.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    pub fn with_rule(mut self, rule: ExistingRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Iterate over rules of one kind.
    pub fn rules_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a ExistingRule> {
        self.rules.iter().filter(move |r| r.kind == kind)
    }
}
