//! Core data structures.
//!
//! This module contains the types shared by generation and resolution:
//! - Labels and import specifications
//! - Generated target descriptors and rule-kind metadata
//! - Existing build-file state

pub mod build_file;
pub mod import_spec;
pub mod label;
pub mod target;

pub use build_file::{BuildFile, ExistingRule};
pub use import_spec::{ImportSpec, Language};
pub use label::Label;
pub use target::{AttrValue, KindInfo, LoadInfo, Target, TargetKind};
