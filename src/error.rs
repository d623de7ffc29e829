use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum FsTreeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid tree: {0}")]
    Tree(#[from] TreeError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tree description '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize tree description: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Structural violations of the tree description.
///
/// Anything that can still be read as a directory or a file is accepted;
/// these are the inputs that cannot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("tree root must be a JSON object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("empty entry name inside '{parent}'")]
    EmptyName { parent: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FsTreeError>;
