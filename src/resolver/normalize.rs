//! Import normalization.
//!
//! Rewrites a raw import string into the canonical form used as the index
//! key: relative imports become repository-relative, alias prefixes are
//! expanded, and bare module names are left alone.
//!
//! Rules are tried in order and the first one that rewrites the import wins:
//!
//! | prefix  | rewrite                                                    |
//! |---------|------------------------------------------------------------|
//! | `@/`    | strip, the rest is repository-relative                     |
//! | `~~/`   | strip, the rest is repository-relative                     |
//! | `~/`    | relative to the nearest `nuxt.config`, else `vue.config/src` |
//! | `../`   | relative to the importing package                          |
//! | `./`    | relative to the importing package                          |

use crate::core::Label;
use crate::resolver::config_locator::{self, NUXT_CONFIG, VUE_CONFIG};
use crate::resolver::index::ImportIndex;
use crate::util::paths;

/// Everything a rewrite rule may consult.
pub struct NormalizeContext<'a> {
    pub index: &'a dyn ImportIndex,
    pub from: &'a Label,
}

/// One alias rule: a prefix and the rewrite applied to the remainder.
///
/// A rewrite returning `None` declines the import and lets later rules try.
pub struct AliasRule {
    pub prefix: &'static str,
    pub rewrite: fn(ctx: &NormalizeContext<'_>, raw: &str, rest: &str) -> Option<String>,
}

/// The alias rules, in priority order.
pub const ALIAS_RULES: &[AliasRule] = &[
    AliasRule {
        prefix: "@/",
        rewrite: root_relative,
    },
    AliasRule {
        prefix: "~~/",
        rewrite: root_relative,
    },
    AliasRule {
        prefix: "~/",
        rewrite: framework_relative,
    },
    AliasRule {
        prefix: "../",
        rewrite: package_relative,
    },
    AliasRule {
        prefix: "./",
        rewrite: package_relative,
    },
];

/// Normalize a raw import as seen from the target `from`.
pub fn normalize(index: &dyn ImportIndex, raw: &str, from: &Label) -> String {
    let ctx = NormalizeContext { index, from };
    ALIAS_RULES
        .iter()
        .filter_map(|rule| {
            raw.strip_prefix(rule.prefix)
                .and_then(|rest| (rule.rewrite)(&ctx, raw, rest))
        })
        .next()
        .unwrap_or_else(|| raw.to_string())
}

fn root_relative(_ctx: &NormalizeContext<'_>, _raw: &str, rest: &str) -> Option<String> {
    Some(rest.to_string())
}

fn package_relative(ctx: &NormalizeContext<'_>, raw: &str, _rest: &str) -> Option<String> {
    Some(paths::join(&ctx.from.pkg, raw))
}

// Only the part after `~/` is joined. Joining the raw import would keep a `~`
// segment, and no index key contains one.
fn framework_relative(ctx: &NormalizeContext<'_>, _raw: &str, rest: &str) -> Option<String> {
    let base = framework_base(ctx.index, ctx.from)?;
    Some(paths::join(&base, rest))
}

/// Directory that `~/` refers to for imports from `from`.
///
/// Nuxt projects alias `~` to the directory holding `nuxt.config`; Vue CLI
/// projects alias it to the `src` directory next to `vue.config`.
pub fn framework_base(index: &dyn ImportIndex, from: &Label) -> Option<String> {
    if let Some(config) = config_locator::locate(index, NUXT_CONFIG, from) {
        return Some(config.pkg);
    }
    config_locator::locate(index, VUE_CONFIG, from).map(|config| paths::join(&config.pkg, "src"))
}
