//! Mock file system for testing
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsEntry, FsError, FsResult};

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    pub dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    /// Paths whose reads or writes fail
    pub broken: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.lock().unwrap().insert(path, content.to_string());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    /// Make every read and write of `path` fail
    pub fn break_path(&self, path: impl Into<PathBuf>) {
        self.broken.lock().unwrap().insert(path.into());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    fn check(&self, path: &Path) -> FsResult<()> {
        if self.broken.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.check(path)?;
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.check(path)?;
        self.add_file(path, content);
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> FsResult<()> {
        self.check(path)?;
        let existing = self.content(path).unwrap_or_default();
        self.add_file(path, &(existing + content));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsEntry>> {
        self.check(path)?;
        if !self.is_dir(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        let mut entries: Vec<FsEntry> = self
            .dirs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.parent() == Some(path))
            .map(|d| FsEntry::new(d.clone(), EntryKind::Directory))
            .collect();
        entries.extend(
            self.files
                .lock()
                .unwrap()
                .keys()
                .filter(|f| f.parent() == Some(path))
                .map(|f| FsEntry::new(f.clone(), EntryKind::File)),
        );
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.check(path)?;
        self.add_dir(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.check(path)?;
        self.files.lock().unwrap().retain(|f, _| !f.starts_with(path));
        self.dirs.lock().unwrap().retain(|d| !d.starts_with(path));
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read(from)?;
        self.write(to, &content)
    }
}
