use std::path::PathBuf;
use thiserror::Error;

/// gclone error types
#[derive(Error, Debug)]
pub enum GcloneError {
    #[error("Cannot determine the home directory")]
    HomeDir,

    #[error("Error parsing config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("gclone is not configured. Please run 'gclone -config' first.")]
    NotConfigured,

    #[error("No repository name given")]
    MissingRepository,

    #[error("Invalid repository name '{0}'")]
    InvalidRepository(String),

    #[error("Error creating directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error cloning repository {url}: {reason}")]
    CloneFailed { url: String, reason: String },

    #[error("Error opening VSCode at '{}': {reason}", .path.display())]
    EditorFailed { path: PathBuf, reason: String },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for gclone operations
pub type Result<T> = std::result::Result<T, GcloneError>;
