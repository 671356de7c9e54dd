//! folder-tree - Print a directory tree as an ASCII diagram
//!
//! Entries are sorted case-insensitively and drawn with `├── ` / `└── `
//! connectors. Directories that can't be listed are shown with a
//! `[Permission Denied]` leaf instead of aborting the walk.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::{Config, ErrorPolicy};
pub use error::{Result, TreeError};
pub use tree::{render_tree, TreePrinter};
