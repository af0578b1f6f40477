//! Error types for atelier-content

use thiserror::Error;

/// Result type alias for content store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for content store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage-medium errors (write faults, capacity, I/O)
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization error while persisting a collection
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors from the key-value persistence medium
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error in the medium's own file image
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
