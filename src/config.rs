use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::render::Strategy;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub document: DocumentConfig,
    pub icons: IconConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Traversal strategy: recursive, iterative, parallel
    pub strategy: Strategy,
    /// Smallest directory fanned out to the thread pool (parallel strategy)
    pub parallel_min_children: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Page title, also used as the heading
    pub title: String,
    /// Stylesheet linked from the page
    pub stylesheet: String,
    /// Scripts loaded with `defer`
    pub scripts: Vec<String>,
    /// Font families offered by the font selector (first is the default)
    pub fonts: Vec<String>,
    /// Stylesheets providing the fonts
    pub font_stylesheets: Vec<String>,
    /// Re-indent the markup before writing
    pub pretty: bool,
    /// Spaces per nesting level when pretty printing
    pub indent: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Replacement directory icon markup
    pub directory: Option<String>,
    /// Replacement fallback file icon markup
    pub generic: Option<String>,
    /// Extra or replacement icons, keyed by extension with its leading dot
    pub extensions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Maximum capture depth (unset = unlimited)
    pub max_depth: Option<usize>,
    /// Include hidden files
    pub include_hidden: bool,
    /// Follow symbolic links
    pub follow_symlinks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Recursive,
            parallel_min_children: 64,
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Interactive FileSystem".to_string(),
            stylesheet: "css/style.css".to_string(),
            scripts: vec![
                "js/dark_mode.js".to_string(),
                "js/select_font.js".to_string(),
            ],
            fonts: vec![
                "Victor Mono".to_string(),
                "TypoPRO Iosevka Term".to_string(),
                "Monaspace Neon".to_string(),
                "Monaspace Argon".to_string(),
                "Monaspace Xenon".to_string(),
                "Monaspace Radon".to_string(),
                "Monaspace Krypton".to_string(),
            ],
            font_stylesheets: vec![
                "https://fonts.googleapis.com/css2?family=Victor+Mono:ital,wght@0,100..700;1,100..700&display=swap".to_string(),
                "https://cdn.jsdelivr.net/npm/@typopro/web-iosevka@3.7.5/TypoPRO-Iosevka.min.css".to_string(),
                "https://cdn.jsdelivr.net/npm/monaspace-font@0.0.2/neon.css".to_string(),
                "https://cdn.jsdelivr.net/npm/monaspace-font@0.0.2/argon.css".to_string(),
                "https://cdn.jsdelivr.net/npm/monaspace-font@0.0.2/xenon.css".to_string(),
                "https://cdn.jsdelivr.net/npm/monaspace-font@0.0.2/radon.css".to_string(),
                "https://cdn.jsdelivr.net/npm/monaspace-font@0.0.2/krypton.css".to_string(),
            ],
            pretty: true,
            indent: 1,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the user config file is
    /// read if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `<config dir>/fstree-html/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fstree-html").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.parallel_min_children == 0 {
            return Err(ConfigError::Invalid(
                "render.parallel_min_children must be at least 1".into(),
            ));
        }
        if self.document.title.trim().is_empty() {
            return Err(ConfigError::Invalid("document.title must not be empty".into()));
        }
        if self.document.indent > 8 {
            return Err(ConfigError::Invalid(format!(
                "document.indent must be at most 8, got {}",
                self.document.indent
            )));
        }
        if let Some(ext) = self.icons.extensions.keys().find(|k| !k.starts_with('.')) {
            return Err(ConfigError::Invalid(format!(
                "icons.extensions key '{ext}' must start with '.'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.render.strategy, Strategy::Recursive);
        assert_eq!(config.document.indent, 1);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[render]"));
        assert!(toml_str.contains("strategy = \"recursive\""));
    }

    #[test]
    fn default_document_matches_font_selector() {
        let config = DocumentConfig::default();
        assert_eq!(config.fonts.len(), config.font_stylesheets.len());
        assert_eq!(config.fonts[0], "Victor Mono");
    }

    #[test]
    fn rejects_extension_without_dot() {
        let mut config = Config::default();
        config.icons.extensions.insert("py".into(), "<i></i>".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'py'"));
    }

    #[test]
    fn rejects_zero_parallel_threshold() {
        let mut config = Config::default();
        config.render.parallel_min_children = 0;
        assert!(config.validate().is_err());
    }
}
