//! Error types for persistence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the catalog or touching flag files.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read from the file system.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the file system.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or parse JSON.
    #[error("failed to serialize: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The catalog file is not there at all.
    ///
    /// Unlike missing flag state (which reads as empty), an absent catalog
    /// means the boundary collaborator is unavailable and propagates.
    #[error("catalog not found: {path}")]
    CatalogMissing { path: PathBuf },

    /// Two distinct item texts normalize to the same id.
    #[error("duplicate item id {id:?}: {first:?} and {second:?}")]
    DuplicateItem {
        id: String,
        first: String,
        second: String,
    },
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
