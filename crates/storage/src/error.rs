//! Error types for storage operations.

use std::fmt;

/// Errors that can occur while reading or writing the flat files.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying file I/O failure.
    Io(String),
    /// CSV encoding/decoding failure.
    Csv(String),
    /// JSON decoding failure.
    Json(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O error: {}", msg),
            StorageError::Csv(msg) => write!(f, "CSV error: {}", msg),
            StorageError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<csv::Error> for StorageError {
    fn from(err: csv::Error) -> Self {
        StorageError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Json(err.to_string())
    }
}
