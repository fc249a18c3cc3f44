//! Diff Use Case
//!
//! Drift check:
//! 1. Plan the enum and component artifacts in memory
//! 2. Fold append fragments into final file contents
//! 3. Compare each file with what is on disk
//! 4. Flag files in the component output directory that the run would not
//!    produce (the next `components` run deletes them)
//!
//! Nothing is written.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::entities::fold_artifacts;
use crate::domain::ports::FileSystem;
use crate::domain::services::{scan_files, DiffResult as FileDiff, Differ};
use crate::error::{IconforgeError, IconforgeResult};

use super::components::{ComponentsOptions, ComponentsUseCase};
use super::enum_gen::{EnumOptions, EnumUseCase};

/// Type of change for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// File does not exist yet
    New,
    /// File exists with different content
    Modified,
    /// File matches the generated content
    Unchanged,
    /// File in the output directory that generation no longer produces
    Stale,
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeType::New => write!(f, "new"),
            ChangeType::Modified => write!(f, "modified"),
            ChangeType::Unchanged => write!(f, "unchanged"),
            ChangeType::Stale => write!(f, "stale"),
        }
    }
}

/// Comparison of one generated file
#[derive(Debug, Clone)]
pub struct DiffEntry {
    /// Path relative to the project root
    pub path: PathBuf,
    pub change_type: ChangeType,
    /// Line diff against the file on disk (empty for unchanged files)
    pub diff: FileDiff,
}

/// Result of the drift check
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.change_type != ChangeType::Unchanged)
    }

    pub fn count(&self, change_type: ChangeType) -> usize {
        self.entries
            .iter()
            .filter(|e| e.change_type == change_type)
            .count()
    }
}

/// Drift check use case
pub struct DiffUseCase<FS: FileSystem + Clone> {
    fs: FS,
}

impl<FS: FileSystem + Clone> DiffUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Compare generated output with the files on disk
    pub fn execute(
        &self,
        enum_options: &EnumOptions,
        components_options: &ComponentsOptions,
    ) -> IconforgeResult<DiffResult> {
        let enum_artifact = EnumUseCase::new(self.fs.clone()).plan(enum_options)?;
        let plan = ComponentsUseCase::new(self.fs.clone()).plan(components_options)?;

        let files = fold_artifacts(std::iter::once(&enum_artifact).chain(plan.artifacts.iter()));
        let planned: BTreeSet<PathBuf> = files.keys().cloned().collect();
        let differ = Differ::new();

        let mut result = DiffResult::default();
        for (path, generated) in files {
            let on_disk = enum_options.project_root.join(&path);
            let label = path.display().to_string();
            let entry = match self.fs.read(&on_disk) {
                Ok(current) if current == generated => DiffEntry {
                    path,
                    change_type: ChangeType::Unchanged,
                    diff: FileDiff::default(),
                },
                Ok(current) => DiffEntry {
                    path,
                    change_type: ChangeType::Modified,
                    diff: differ.diff(&current, &generated, &label),
                },
                Err(_) if !self.fs.exists(&on_disk) => DiffEntry {
                    path,
                    change_type: ChangeType::New,
                    diff: differ.diff("", &generated, &label),
                },
                Err(e) => {
                    return Err(IconforgeError::fs(&on_disk, e.at(&on_disk)));
                }
            };
            result.entries.push(entry);
        }

        let root = &components_options.project_root;
        let output_dir = root.join(&components_options.output);
        if self.fs.is_dir(&output_dir) {
            for file in scan_files(&self.fs, &output_dir)? {
                let path = file.strip_prefix(root).unwrap_or(&file).to_path_buf();
                if planned.contains(&path) {
                    continue;
                }
                let label = path.display().to_string();
                let diff = match self.fs.read(&file) {
                    Ok(current) => differ.diff(&current, "", &label),
                    Err(_) => FileDiff::default(),
                };
                result.entries.push(DiffEntry {
                    path,
                    change_type: ChangeType::Stale,
                    diff,
                });
            }
        }
        Ok(result)
    }
}
