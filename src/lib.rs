//! fstree-html - Render filesystem tree descriptions as interactive HTML
//!
//! This crate provides functionality for:
//! - Loading tree descriptions from JSON or capturing them from disk
//! - Rendering trees as nested, collapsible markup with icons
//! - Assembling and pretty printing the final page

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod icons;
pub mod render;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{FsTreeError, Result};
pub use icons::IconTable;
pub use render::{Strategy, TreeRenderer};
pub use tree::{Node, Tree};
