//! Error types for the sompack core library packager.

use std::path::PathBuf;
use thiserror::Error;

/// Packaging errors. Every variant is fatal: the run aborts with no
/// partial output.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Root is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("File is not valid UTF-8 text: {0:?}")]
    NotText(PathBuf),

    #[error("Tree serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PackError {
    /// Wrap an I/O failure with the path it occurred on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
