//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod paths;

pub use config::{ConfigError, JsConfig};
pub use diagnostic::Diagnostic;
