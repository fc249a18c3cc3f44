//! Tree Scanner
//!
//! Depth-first walk of a source directory through the `FileSystem` port.
//! Entries of each directory are visited in file-name order so repeated
//! runs see the same sequence. Symlink cycles are not detected; source trees
//! are expected to be free of them.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::value_objects::is_asset;
use crate::error::{IconforgeError, IconforgeResult};

/// Which leaf files the scanner collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFilter {
    /// Only `.svg` assets
    Assets,
    /// Every regular file
    AllFiles,
}

impl ScanFilter {
    fn accepts(self, path: &Path) -> bool {
        match self {
            ScanFilter::Assets => is_asset(path),
            ScanFilter::AllFiles => true,
        }
    }
}

/// Recursive directory scanner
pub struct TreeScanner<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    filter: ScanFilter,
}

impl<'a, FS: FileSystem + ?Sized> TreeScanner<'a, FS> {
    pub fn new(fs: &'a FS, filter: ScanFilter) -> Self {
        Self { fs, filter }
    }

    /// Collect every matching file below `root`
    ///
    /// Fails on the first unreadable directory; callers that want
    /// best-effort behavior catch the error themselves.
    pub fn scan(&self, root: &Path) -> IconforgeResult<Vec<PathBuf>> {
        if !self.fs.is_dir(root) {
            return Err(IconforgeError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        self.scan_into(root, &mut files)?;
        Ok(files)
    }

    fn scan_into(&self, dir: &Path, files: &mut Vec<PathBuf>) -> IconforgeResult<()> {
        let mut entries = self
            .fs
            .read_dir(dir)
            .map_err(|e| IconforgeError::fs(dir, e.at(dir)))?;
        entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

        for entry in entries {
            match entry.kind {
                EntryKind::Directory => self.scan_into(&entry.path, files)?,
                EntryKind::File if self.filter.accepts(&entry.path) => files.push(entry.path),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Scan `root` for SVG assets
pub fn scan_assets<FS: FileSystem + ?Sized>(fs: &FS, root: &Path) -> IconforgeResult<Vec<PathBuf>> {
    TreeScanner::new(fs, ScanFilter::Assets).scan(root)
}

/// Scan `root` for every file regardless of extension
pub fn scan_files<FS: FileSystem + ?Sized>(fs: &FS, root: &Path) -> IconforgeResult<Vec<PathBuf>> {
    TreeScanner::new(fs, ScanFilter::AllFiles).scan(root)
}
