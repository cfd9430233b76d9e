//! Error types for tree loading and command execution.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while touching the filesystem during Load or Export.
///
/// A reference that does not exist is not an error; it becomes a
/// [`NodeKind::Missing`](crate::types::NodeKind::Missing) leaf instead.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to list directory {path:?}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read playlist {path:?}: {source}")]
    ReadPlaylist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write playlist {path:?}: {source}")]
    WritePlaylist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Command-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
