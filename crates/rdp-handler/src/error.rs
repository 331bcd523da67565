use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No rdp:// URI was provided")]
    NoArguments,

    #[error("Invalid RDP URL format: expected 'rdp://<parameters>', got '{uri}'")]
    InvalidScheme { uri: String },

    #[error("Failed to write configuration file {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start remote desktop client '{executable}': {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("{0} is only supported on Windows")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
