//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsEntry, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so readers never observe a half-written artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// File a write to `path` should land in; symlinks are followed
    fn resolve_link(path: &Path) -> FsResult<PathBuf> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
                Ok(resolved) => Ok(resolved),
                // Dangling link: create the file it points at
                Err(_) => {
                    let link = fs::read_link(path).map_err(|e| FsError::from(e).at(path))?;
                    Ok(match path.parent() {
                        Some(parent) => parent.join(link),
                        None => link,
                    })
                }
            },
            _ => Ok(path.to_path_buf()),
        }
    }

    /// Temp file created with the mode a plain `File::create` would get
    fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        builder.tempfile_in(dir)
    }

    fn ensure_parent(path: &Path) -> FsResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| FsError::from(e).at(parent))
            }
            _ => Ok(()),
        }
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::from(e).at(path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let target = Self::resolve_link(path)?;
        Self::ensure_parent(&target)?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

        let mut tmp = Self::temp_file_in(dir).map_err(|e| FsError::from(e).at(dir))?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        // The rename must not change the mode of an existing file
        if let Some(permissions) = existing {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| FsError::from(e).at(&target))?;
        }
        tmp.persist(&target)
            .map_err(|e| FsError::from(e.error).at(&target))?;
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> FsResult<()> {
        Self::ensure_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FsError::from(e).at(path))?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FsError::from(e).at(path))? {
            let entry = entry?;
            // file_type() does not follow symlinks; metadata() does
            let file_type = fs::metadata(entry.path())?.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(FsEntry::new(entry.path(), kind));
        }
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from(e).at(path))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::from(e).at(path))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        Self::ensure_parent(to)?;
        fs::copy(from, to).map_err(|e| FsError::from(e).at(from))?;
        Ok(())
    }
}
