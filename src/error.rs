//! Error types for iconforge
//!
//! Uses `thiserror` for library errors. Command handlers wrap these in
//! `anyhow` for context.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for iconforge operations
pub type IconforgeResult<T> = Result<T, IconforgeError>;

/// Main error type for iconforge operations
#[derive(Error, Debug)]
pub enum IconforgeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Asset path does not follow the expected layout
    #[error("unexpected asset path '{path}': expected {expected}")]
    InvalidAssetPath { path: PathBuf, expected: String },

    /// Two assets derived the same identifier
    #[error("identifier '{identifier}' is derived from both {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Malformed iconforge.toml
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File system port failure while reading or writing
    #[error("{path}: {source}")]
    Fs {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// One or more items of a batch job failed
    #[error("{failed} of {total} {what} failed")]
    BatchFailed {
        what: &'static str,
        failed: usize,
        total: usize,
    },
}

impl IconforgeError {
    /// Attach a path to a file system port error
    pub fn fs(path: impl Into<PathBuf>, source: FsError) -> Self {
        Self::Fs {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DirectoryNotFound { path }
            | Self::InvalidAssetPath { path, .. }
            | Self::Fs { path, .. } => Some(path),
            Self::DuplicateIdentifier { second, .. } => Some(second),
            Self::InvalidConfig { file, .. } => Some(file),
            Self::Io(_) | Self::BatchFailed { .. } => None,
        }
    }
}
