//! File-to-target-kind classification.
//!
//! A file either becomes a passthrough `js_import` target (configured
//! extensions), is skipped as a passthrough file, or maps to one of the
//! resolvable target kinds. The kind rules are checked in order and the first
//! match wins.

use crate::core::TargetKind;
use crate::util::paths;
use crate::util::JsConfig;

/// Suffixes of files that get resolvable targets.
pub const SOURCE_SUFFIXES: &[&str] = &[".vue", ".js", ".jsx", ".tsx", ".ts"];

/// Test files driven by other runners, never turned into targets.
pub const EXCLUDED_SUFFIXES: &[&str] = &["k6.js", "e2e.test.js"];

/// How a single file is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Exported as-is through a `js_import` target
    Import,

    /// No target; only tracked for stale `js_import` detection
    Passthrough,

    /// A target whose imports get resolved
    Source(TargetKind),
}

struct KindRule {
    matches: fn(file: &str, config: &JsConfig) -> bool,
    class: FileClass,
}

const KIND_RULES: &[KindRule] = &[
    KindRule {
        matches: is_excluded,
        class: FileClass::Passthrough,
    },
    KindRule {
        matches: is_test,
        class: FileClass::Source(TargetKind::Test),
    },
    KindRule {
        matches: is_typed,
        class: FileClass::Source(TargetKind::TypedModule),
    },
    KindRule {
        matches: |_, _| true,
        class: FileClass::Source(TargetKind::Library),
    },
];

/// Classify one file of a directory.
pub fn classify_file(file: &str, config: &JsConfig) -> FileClass {
    if config.is_import_file(file) {
        return FileClass::Import;
    }
    KIND_RULES
        .iter()
        .find(|rule| (rule.matches)(file, config))
        .map(|rule| rule.class)
        .unwrap_or(FileClass::Passthrough)
}

/// Name of the target generated for `file`.
///
/// Targets are named after the file without its extension. Passthrough
/// targets get the extension appended (`logo.svg` is `logo_svg`) so they do
/// not collide with a source file sharing the stem.
pub fn target_name(file: &str, kind: TargetKind) -> String {
    let base = paths::base_name(file);
    let stem = paths::without_extension(base);
    match kind {
        TargetKind::Import => {
            let ext = paths::extension(base).replace('.', "");
            format!("{}_{}", stem, ext)
        }
        _ => stem.to_string(),
    }
}

fn is_excluded(file: &str, config: &JsConfig) -> bool {
    !SOURCE_SUFFIXES.iter().any(|s| file.ends_with(s))
        || EXCLUDED_SUFFIXES.iter().any(|s| file.ends_with(s))
        || (!config.generate_tests && file.ends_with(".test.js"))
}

fn is_test(file: &str, _config: &JsConfig) -> bool {
    file.ends_with(".test.js") || file.ends_with("test.ts")
}

fn is_typed(file: &str, _config: &JsConfig) -> bool {
    file.ends_with(".ts") || file.ends_with(".tsx")
}
