//! FileSystem port - abstraction over file I/O operations
//!
//! Scanning, generation and copying go through this trait so use cases can
//! run against the local disk or an in-memory mock.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl FsError {
    /// Fill in the path for errors converted from `std::io::Error`
    pub fn at(self, path: &Path) -> Self {
        match self {
            FsError::NotFound(p) if p.as_os_str().is_empty() => {
                FsError::NotFound(path.to_path_buf())
            }
            FsError::PermissionDenied(p) if p.as_os_str().is_empty() => {
                FsError::PermissionDenied(path.to_path_buf())
            }
            other => other,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Kind of a directory entry, as reported by the file system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem: Sync {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace file content atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Append content to a file, creating it and its parent directories
    fn append(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the entries of a directory (unordered)
    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsEntry>>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a single file, overwriting the destination
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()>;
}
