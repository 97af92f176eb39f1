//! Error types for the byte-pair vocabulary library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vocabulary operations.
#[derive(Error, Debug)]
pub enum VocabError {
    /// I/O error with file context
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed vocabulary data (bad length, truncated record)
    #[error("Invalid vocabulary data: {0}")]
    Format(String),
}

impl VocabError {
    /// Attach a file path to an `std::io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;
