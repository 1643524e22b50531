//! Target definitions - what gets generated.
//!
//! A Target is the in-memory form of one rule in a build file before it is
//! merged and serialized by the host. Attributes are kept in a sorted map so
//! the rendered output is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Rule kind for generated test targets.
pub const JEST_TEST: &str = "jest_test";

/// Rule kind for TypeScript targets.
pub const TS_PROJECT: &str = "ts_project";

/// Rule kind for passthrough targets that only export a file.
pub const JS_IMPORT: &str = "js_import";

/// Default rule kind for plain JavaScript/Vue libraries.
pub const DEFAULT_LIBRARY_KIND: &str = "js_library";

/// Visibility applied to generated library-like targets.
pub const PUBLIC_VISIBILITY: &str = "//visibility:public";

/// The kind of target a source file maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// `.vue`, `.js` and `.jsx` sources
    Library,

    /// Jest test files
    Test,

    /// `.ts` and `.tsx` sources
    TypedModule,

    /// Files exported as-is, without import resolution
    Import,
}

impl TargetKind {
    /// Get the rule kind name for this target kind.
    ///
    /// The library kind is configurable, so its name is passed in.
    pub fn rule_kind(&self, library_kind: &str) -> String {
        match self {
            TargetKind::Library => library_kind.to_string(),
            TargetKind::Test => JEST_TEST.to_string(),
            TargetKind::TypedModule => TS_PROJECT.to_string(),
            TargetKind::Import => JS_IMPORT.to_string(),
        }
    }

    /// Whether generated targets of this kind are publicly visible.
    pub fn is_public(&self) -> bool {
        !matches!(self, TargetKind::Test)
    }

    /// Whether raw imports of this kind go through resolution.
    pub fn resolves_imports(&self) -> bool {
        !matches!(self, TargetKind::Import)
    }
}

/// An attribute value on a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A single string, e.g. `config = ":jest.config"`
    String(String),

    /// A literal list of strings, e.g. `srcs = ["a.js"]`
    List(Vec<String>),

    /// Any other expression kept verbatim, e.g. `glob(["*.js"])`.
    /// Serialized as `{"expr": "..."}` so it never reads back as a string.
    Expr {
        expr: String,
    },
}

impl AttrValue {
    /// Get the value as a string list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the value as a single string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A generated target descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Rule kind, e.g. `js_library`
    pub kind: String,

    /// Target name, unique within its directory
    pub name: String,

    /// Attributes by name
    #[serde(default)]
    pub attrs: BTreeMap<String, AttrValue>,
}

impl Target {
    /// Create a new target with no attributes.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Target {
            kind: kind.into(),
            name: name.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// Set the `srcs` attribute.
    pub fn with_srcs(mut self, srcs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let srcs = srcs.into_iter().map(|s| s.into()).collect();
        self.set_attr("srcs", AttrValue::List(srcs));
        self
    }

    /// Mark the target as publicly visible.
    pub fn with_public_visibility(mut self) -> Self {
        self.set_attr(
            "visibility",
            AttrValue::List(vec![PUBLIC_VISIBILITY.to_string()]),
        );
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: AttrValue) {
        self.attrs.insert(key.into(), value);
    }

    /// Remove an attribute.
    pub fn del_attr(&mut self, key: &str) -> Option<AttrValue> {
        self.attrs.remove(key)
    }

    /// Get an attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Get a string-list attribute, or an empty slice if it is missing or
    /// not a literal list.
    pub fn attr_strings(&self, key: &str) -> &[String] {
        self.attr(key).and_then(AttrValue::as_list).unwrap_or(&[])
    }

    /// Get the declared sources.
    pub fn srcs(&self) -> &[String] {
        self.attr_strings("srcs")
    }

    /// Get the resolved dependencies.
    pub fn deps(&self) -> &[String] {
        self.attr_strings("deps")
    }

    /// Check if this is a test target.
    pub fn is_test(&self) -> bool {
        self.kind == JEST_TEST
    }
}

/// Merge and resolution metadata for one rule kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindInfo {
    /// Whether any rule of this kind may match a generated one
    pub match_any: bool,

    /// Attributes that must be non-empty for the rule to be kept
    pub non_empty_attrs: BTreeSet<&'static str>,

    /// Attributes whose generated values replace existing ones on merge
    pub mergeable_attrs: BTreeSet<&'static str>,

    /// Attributes written during the resolve phase
    pub resolve_attrs: BTreeSet<&'static str>,
}

impl KindInfo {
    fn with_resolve_attrs(resolve_attrs: &[&'static str]) -> Self {
        KindInfo {
            match_any: false,
            non_empty_attrs: ["srcs"].into_iter().collect(),
            mergeable_attrs: ["srcs"].into_iter().collect(),
            resolve_attrs: resolve_attrs.iter().copied().collect(),
        }
    }
}

/// A `load` statement the host must emit for generated rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadInfo {
    /// Label of the `.bzl` file
    pub name: String,

    /// Rule kinds loaded from it
    pub symbols: Vec<String>,
}

/// Kind metadata for every rule kind this crate generates.
pub fn kinds(library_kind: &str) -> BTreeMap<String, KindInfo> {
    let mut kinds = BTreeMap::new();
    kinds.insert(
        library_kind.to_string(),
        KindInfo::with_resolve_attrs(&["deps"]),
    );
    kinds.insert(
        JEST_TEST.to_string(),
        KindInfo::with_resolve_attrs(&["deps", "config"]),
    );
    kinds.insert(
        JS_IMPORT.to_string(),
        KindInfo::with_resolve_attrs(&["deps", "config"]),
    );
    kinds.insert(
        TS_PROJECT.to_string(),
        KindInfo::with_resolve_attrs(&["deps"]),
    );
    kinds
}

/// Load statements covering every generated rule kind.
pub fn loads(rules_file: &str, library_kind: &str) -> Vec<LoadInfo> {
    vec![LoadInfo {
        name: rules_file.to_string(),
        symbols: vec![
            library_kind.to_string(),
            TS_PROJECT.to_string(),
            JEST_TEST.to_string(),
            JS_IMPORT.to_string(),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_names() {
        assert_eq!(TargetKind::Library.rule_kind("js_library"), "js_library");
        assert_eq!(TargetKind::Library.rule_kind("vue_library"), "vue_library");
        assert_eq!(TargetKind::Test.rule_kind("js_library"), "jest_test");
        assert_eq!(TargetKind::TypedModule.rule_kind("js_library"), "ts_project");
        assert_eq!(TargetKind::Import.rule_kind("js_library"), "js_import");
    }

    #[test]
    fn test_target_builder() {
        let target = Target::new("ts_project", "app")
            .with_srcs(["app.ts"])
            .with_public_visibility();

        assert_eq!(target.srcs(), ["app.ts"]);
        assert_eq!(target.attr_strings("visibility"), [PUBLIC_VISIBILITY]);
        assert!(target.deps().is_empty());
        assert!(!target.is_test());
    }

    #[test]
    fn test_attr_strings_ignores_expressions() {
        let mut target = Target::new("js_library", "lib");
        target.set_attr("srcs", AttrValue::Expr {
            expr: "glob([\"*.js\"])".to_string(),
        });
        assert!(target.srcs().is_empty());
        assert!(target.attr("srcs").is_some());
    }

    #[test]
    fn test_kinds_table() {
        let kinds = kinds("js_library");
        assert_eq!(kinds.len(), 4);
        assert!(kinds["jest_test"].resolve_attrs.contains("config"));
        assert!(!kinds["ts_project"].resolve_attrs.contains("config"));
        assert!(kinds["js_library"].non_empty_attrs.contains("srcs"));
    }

    #[test]
    fn test_loads_lists_all_symbols() {
        let loads = loads("@rules//:defs.bzl", "js_library");
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].symbols.len(), 4);
    }
}
