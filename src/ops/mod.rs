//! High-level operations.
//!
//! Entry points for hosts driving generation and resolution over a tree.

pub mod update;

pub use update::{
    index_directories, resolve_directory, update_directories, update_directory, update_tree,
    DirectoryUpdate,
};
