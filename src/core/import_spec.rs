//! Import specifications - the keys of the import index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language tag attached to import specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript and TypeScript sources
    #[default]
    Js,
}

impl Language {
    /// Name used as the rule-kind prefix and index tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Js => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies an importable unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportSpec {
    pub lang: Language,
    pub imp: String,
}

impl ImportSpec {
    pub fn new(lang: Language, imp: impl Into<String>) -> Self {
        ImportSpec {
            lang,
            imp: imp.into(),
        }
    }

    /// A JavaScript import specification.
    pub fn js(imp: impl Into<String>) -> Self {
        Self::new(Language::Js, imp)
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lang, self.imp)
    }
}
