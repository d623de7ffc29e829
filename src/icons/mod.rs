//! Icon lookup handed to the renderer.

mod catalog;

use std::collections::HashMap;

use crate::config::IconConfig;

pub use catalog::{builtin_file_icons, FOLDER_ICON, GENERIC_FILE_ICON};

/// Read-only icon configuration: a directory icon, a fallback file icon and
/// per-extension file icons keyed by extension with its leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
    directory: String,
    generic: String,
    extensions: HashMap<String, String>,
}

impl Default for IconTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IconTable {
    /// A table with no extension icons.
    pub fn new(directory: impl Into<String>, generic: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            generic: generic.into(),
            extensions: HashMap::new(),
        }
    }

    /// The icons shipped with the crate.
    pub fn builtin() -> Self {
        let mut table = Self::new(FOLDER_ICON, GENERIC_FILE_ICON);
        for (ext, icon) in builtin_file_icons() {
            table.insert(ext, icon);
        }
        table
    }

    /// Built-in icons with the configured overrides applied.
    pub fn from_config(config: &IconConfig) -> Self {
        let mut table = Self::builtin();
        if let Some(directory) = &config.directory {
            table.directory = directory.clone();
        }
        if let Some(generic) = &config.generic {
            table.generic = generic.clone();
        }
        for (ext, icon) in &config.extensions {
            table.insert(ext.clone(), icon.clone());
        }
        tracing::debug!(
            extensions = table.extensions.len(),
            overrides = config.extensions.len(),
            "Built icon table"
        );
        table
    }

    pub fn insert(&mut self, extension: impl Into<String>, icon: impl Into<String>) {
        self.extensions.insert(extension.into(), icon.into());
    }

    pub fn with_icon(mut self, extension: impl Into<String>, icon: impl Into<String>) -> Self {
        self.insert(extension, icon);
        self
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, extension: &str) -> Option<&str> {
        self.extensions.get(extension).map(String::as_str)
    }

    /// Icon for a file with the given extension, generic when unmapped.
    pub fn file_icon(&self, extension: &str) -> &str {
        self.get(extension).unwrap_or(&self.generic)
    }

    pub fn directory_icon(&self) -> &str {
        &self.directory
    }

    pub fn generic_icon(&self) -> &str {
        &self.generic
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
