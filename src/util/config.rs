//! Configuration for rule generation.
//!
//! Configuration comes from two places:
//! - A TOML file (`jsrules.toml`) with repository-wide defaults
//! - Build-file directives (`# gazelle:js_import_extensions .css`) that
//!   apply to a directory and everything below it
//!
//! Per-directory configuration is derived by cloning the parent's config and
//! applying that directory's directives.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::target::DEFAULT_LIBRARY_KIND;

/// Default name of the external repository holding npm packages.
pub const DEFAULT_NPM_REPOSITORY: &str = "npm";

/// Default `.bzl` file the generated rule kinds are loaded from.
pub const DEFAULT_RULES_FILE: &str = "@test_tools_js//:defs.bzl";

/// Error applying a configuration directive.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown directive `{0}`")]
    UnknownDirective(String),

    #[error("invalid value `{value}` for directive `{directive}`: expected {expected}")]
    InvalidValue {
        directive: String,
        value: String,
        expected: &'static str,
    },
}

/// JavaScript rule generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsConfig {
    /// File extensions exported through passthrough `js_import` targets
    pub import_extensions: Vec<String>,

    /// Generate `jest_test` targets for `.test.js` files
    pub generate_tests: bool,

    /// Rule kind for plain JavaScript/Vue libraries
    pub library_kind: String,

    /// External repository that provides npm packages
    pub npm_repository: String,

    /// `.bzl` file the generated rule kinds are loaded from
    pub rules_file: String,
}

impl Default for JsConfig {
    fn default() -> Self {
        JsConfig {
            import_extensions: Vec::new(),
            generate_tests: true,
            library_kind: DEFAULT_LIBRARY_KIND.to_string(),
            npm_repository: DEFAULT_NPM_REPOSITORY.to_string(),
            rules_file: DEFAULT_RULES_FILE.to_string(),
        }
    }
}

impl JsConfig {
    /// Directive names understood by [`JsConfig::apply_directive`].
    pub const DIRECTIVES: &'static [&'static str] = &[
        "js_import_extensions",
        "js_generate_tests",
        "js_library_kind",
        "js_npm_repository",
    ];

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    ///
    /// Only values that differ from the defaults override.
    pub fn merge(&mut self, other: JsConfig) {
        let defaults = JsConfig::default();

        if !other.import_extensions.is_empty() {
            self.import_extensions = other.import_extensions;
        }
        if other.generate_tests != defaults.generate_tests {
            self.generate_tests = other.generate_tests;
        }
        if other.library_kind != defaults.library_kind {
            self.library_kind = other.library_kind;
        }
        if other.npm_repository != defaults.npm_repository {
            self.npm_repository = other.npm_repository;
        }
        if other.rules_file != defaults.rules_file {
            self.rules_file = other.rules_file;
        }
    }

    /// Apply one build-file directive.
    pub fn apply_directive(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "js_import_extensions" => {
                self.import_extensions = value
                    .split(',')
                    .map(str::trim)
                    .filter(|ext| !ext.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "js_generate_tests" => {
                self.generate_tests = parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                    directive: key.to_string(),
                    value: value.to_string(),
                    expected: "true or false",
                })?;
            }
            "js_library_kind" => {
                self.library_kind = non_empty(key, value)?;
            }
            "js_npm_repository" => {
                self.npm_repository = non_empty(key, value)?.trim_start_matches('@').to_string();
            }
            _ => return Err(ConfigError::UnknownDirective(key.to_string())),
        }
        Ok(())
    }

    /// Derive the configuration of a child directory.
    ///
    /// Directives are applied in order. Directives of other languages are
    /// ignored; an invalid value is reported and skipped so the rest of the
    /// directory still gets processed.
    pub fn for_child<'a>(
        &self,
        directives: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> JsConfig {
        let mut child = self.clone();
        for (key, value) in directives {
            if !Self::DIRECTIVES.contains(&key) {
                tracing::trace!("ignoring directive {}", key);
                continue;
            }
            if let Err(e) = child.apply_directive(key, value) {
                tracing::warn!("{}", e);
            }
        }
        child
    }

    /// Check whether a file is exported through a passthrough target.
    pub fn is_import_file(&self, file: &str) -> bool {
        self.import_extensions.iter().any(|ext| file.ends_with(ext.as_str()))
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> JsConfig {
    let mut config = JsConfig::default();

    if global_path.exists() {
        config.merge(JsConfig::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(JsConfig::load_or_default(project_path));
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(directive: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            directive: directive.to_string(),
            value: value.to_string(),
            expected: "a non-empty name",
        });
    }
    Ok(value.to_string())
}
