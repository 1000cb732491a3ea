//! Error types for deckit-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Fatal errors that abort a deck build.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("cannot create output file: {}", .path.display())]
    Unwritable { path: PathBuf },

    #[error("invalid API key: {0}")]
    InvalidCredential(String),

    #[error("lookup failed for \"{word}\": {source}")]
    Lookup {
        word: String,
        #[source]
        source: LookupError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckError {
    /// Map an io error on `path`, turning NotFound into `MissingFile`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile { path: path.into() }
        } else {
            Self::Io(err)
        }
    }

    /// Map an io error creating `path`, turning NotFound into `Unwritable`.
    pub fn from_output_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::Unwritable { path: path.into() }
        } else {
            Self::Io(err)
        }
    }
}

/// Errors reported by a lookup provider.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("invalid API key: {0}")]
    InvalidCredential(String),

    #[error("parse error: {0}")]
    Parse(String),
}
