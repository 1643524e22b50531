//! Upward search for `<name>.config` targets.
//!
//! Framework and test-runner configs (`jest.config.js`, `vue.config.js`,
//! `nuxt.config.js`) are ordinary indexed targets. The nearest one at or above
//! a package wins.

use crate::core::Label;
use crate::resolver::index::ImportIndex;
use crate::resolver::lookup::{resolve_with_index, ResolutionOutcome};
use crate::util::paths;

/// Config name searched for test targets.
pub const JEST_CONFIG: &str = "jest";

/// Config names that anchor `~/` imports, in lookup order.
pub const NUXT_CONFIG: &str = "nuxt";
pub const VUE_CONFIG: &str = "vue";

/// Find the nearest `<config_name>.config` target at or above `from`'s package.
///
/// Returns the absolute label of the config, or `None` once the search has
/// passed the repository root.
pub fn locate(index: &dyn ImportIndex, config_name: &str, from: &Label) -> Option<Label> {
    let file = format!("{}.config", config_name);
    let mut dir = if from.pkg.is_empty() {
        ".".to_string()
    } else {
        from.pkg.clone()
    };

    while !paths::escapes_root(&dir) {
        let imp = paths::join(&dir, &file);
        if let ResolutionOutcome::Resolved(label) = resolve_with_index(index, &imp, from) {
            tracing::debug!("found {} for {} at {}", file, from, label);
            return Some(label);
        }
        dir = paths::join(&dir, "..");
    }

    None
}
