//! Labels - how targets refer to each other.
//!
//! A label names a target as `@repo//pkg:name`. Within the same repository
//! the repo part is dropped, and within the same package the label is
//! written relative as `:name`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::paths;

/// A reference to a target in the build graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label {
    /// External repository name, empty for the main repository
    pub repo: String,

    /// Package path relative to the repository root, empty for the root
    pub pkg: String,

    /// Target name within the package
    pub name: String,

    /// Rendered as `:name` relative to the current package
    #[serde(default)]
    pub relative: bool,
}

impl Label {
    /// Create an absolute label.
    pub fn new(repo: impl Into<String>, pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Label {
            repo: repo.into(),
            pkg: pkg.into(),
            name: name.into(),
            relative: false,
        }
    }

    /// Create a label in the main repository.
    pub fn local(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new("", pkg, name)
    }

    /// Express this label relative to the given repository and package.
    ///
    /// Labels in the same package become `:name`; labels in the same
    /// repository lose their repo prefix; anything else is unchanged.
    pub fn rel(&self, repo: &str, pkg: &str) -> Label {
        if self.relative || self.repo != repo {
            return self.clone();
        }
        if self.pkg == pkg {
            return Label {
                repo: String::new(),
                pkg: String::new(),
                name: self.name.clone(),
                relative: true,
            };
        }
        Label {
            repo: String::new(),
            ..self.clone()
        }
    }

    /// Check whether two labels name the same target.
    pub fn same_target(&self, other: &Label) -> bool {
        self.repo == other.repo && self.pkg == other.pkg && self.name == other.name
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            return write!(f, ":{}", self.name);
        }
        if !self.repo.is_empty() {
            write!(f, "@{}", self.repo)?;
        }
        if paths::base_name(&self.pkg) == self.name {
            write!(f, "//{}", self.pkg)
        } else {
            write!(f, "//{}:{}", self.pkg, self.name)
        }
    }
}
