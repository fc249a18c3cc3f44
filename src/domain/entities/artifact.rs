//! GeneratedArtifact entity - a generated output file
//!
//! Artifacts are produced by the emitter and consumed exactly once by the
//! writer. They are regenerated in full on every run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// How the writer persists an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the whole file
    #[default]
    Overwrite,
    /// Append to whatever the file holds; only valid once per run
    Append,
}

/// A generated output file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Destination path (relative to the project root)
    path: PathBuf,
    /// Generated content, written verbatim
    content: String,
    mode: WriteMode,
}

impl GeneratedArtifact {
    /// Create an artifact that replaces its destination
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: WriteMode::Overwrite,
        }
    }

    /// Create an artifact that is appended to its destination
    pub fn append(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: WriteMode::Append,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }
}

/// Final file contents after applying artifacts in order to empty files
///
/// Used to compare a generation run with what is on disk without writing.
pub fn fold_artifacts<'a>(
    artifacts: impl IntoIterator<Item = &'a GeneratedArtifact>,
) -> BTreeMap<PathBuf, String> {
    let mut files: BTreeMap<PathBuf, String> = BTreeMap::new();
    for artifact in artifacts {
        match artifact.mode {
            WriteMode::Overwrite => {
                files.insert(artifact.path.clone(), artifact.content.clone());
            }
            WriteMode::Append => {
                files
                    .entry(artifact.path.clone())
                    .or_default()
                    .push_str(&artifact.content);
            }
        }
    }
    files
}
