//! Headers Use Case
//!
//! Best-effort license header maintenance over the asset category
//! directories. Per-file and per-directory problems are reported through the
//! event sink and processing continues; the caller decides whether the
//! collected failures fail the command.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, NoopEventSink, PipelineEvent, PipelineEventSink};
use crate::domain::services::{scan_assets, HeaderChange, LicenseHeader};
use crate::error::{IconforgeError, IconforgeResult};

const STAGE: &str = "headers";

/// A file whose header could not be maintained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a header run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersResult {
    pub inserted: Vec<PathBuf>,
    pub replaced: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub failures: Vec<HeaderFailure>,
    /// Category directories that could not be scanned
    pub skipped_dirs: Vec<PathBuf>,
}

impl HeadersResult {
    /// Files whose content changed
    pub fn updated(&self) -> usize {
        self.inserted.len() + self.replaced.len()
    }

    pub fn total(&self) -> usize {
        self.updated() + self.unchanged.len() + self.failures.len()
    }

    /// Turn per-file failures into a batch error
    pub fn ensure_success(&self) -> IconforgeResult<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(IconforgeError::BatchFailed {
            what: "files",
            failed: self.failures.len(),
            total: self.total(),
        })
    }
}

/// License header maintenance use case
pub struct HeadersUseCase<FS: FileSystem> {
    fs: FS,
    header: LicenseHeader,
}

impl<FS: FileSystem> HeadersUseCase<FS> {
    /// Use case stamping the header for the current year
    pub fn new(fs: FS) -> Self {
        Self::with_header(fs, LicenseHeader::current())
    }

    pub fn with_header(fs: FS, header: LicenseHeader) -> Self {
        Self { fs, header }
    }

    pub fn execute(&self, project_root: &Path, directories: &[PathBuf]) -> HeadersResult {
        self.execute_with_events(project_root, directories, &NoopEventSink)
    }

    /// Apply the header to every asset below `directories`
    pub fn execute_with_events(
        &self,
        project_root: &Path,
        directories: &[PathBuf],
        event_sink: &dyn PipelineEventSink,
    ) -> HeadersResult {
        let mut result = HeadersResult::default();

        for dir in directories {
            event_sink.on_event(PipelineEvent::Started {
                stage: STAGE,
                source: dir.clone(),
            });

            let files = match scan_assets(&self.fs, &project_root.join(dir)) {
                Ok(files) => files,
                Err(e) => {
                    event_sink.on_event(PipelineEvent::Warning {
                        message: format!("skipping {}: {}", dir.display(), e),
                    });
                    result.skipped_dirs.push(dir.clone());
                    continue;
                }
            };
            event_sink.on_event(PipelineEvent::Scanned {
                stage: STAGE,
                count: files.len(),
            });

            for file in files {
                let relative = file.strip_prefix(project_root).unwrap_or(&file).to_path_buf();
                match self.process_file(&file) {
                    Ok(change) => {
                        let event = match change {
                            HeaderChange::Inserted => PipelineEvent::HeaderInserted {
                                path: relative.clone(),
                            },
                            HeaderChange::Replaced => PipelineEvent::HeaderReplaced {
                                path: relative.clone(),
                            },
                            HeaderChange::Unchanged => PipelineEvent::HeaderUnchanged {
                                path: relative.clone(),
                            },
                        };
                        event_sink.on_event(event);
                        match change {
                            HeaderChange::Inserted => result.inserted.push(relative),
                            HeaderChange::Replaced => result.replaced.push(relative),
                            HeaderChange::Unchanged => result.unchanged.push(relative),
                        }
                    }
                    Err(e) => {
                        let error = e.to_string();
                        event_sink.on_event(PipelineEvent::ItemFailed {
                            path: relative.clone(),
                            error: error.clone(),
                        });
                        result.failures.push(HeaderFailure {
                            path: relative,
                            error,
                        });
                    }
                }
            }
        }

        event_sink.on_event(PipelineEvent::Completed {
            stage: STAGE,
            written: result.updated(),
            failed: result.failures.len(),
        });
        result
    }

    fn process_file(&self, path: &Path) -> IconforgeResult<HeaderChange> {
        let content = self
            .fs
            .read(path)
            .map_err(|e| IconforgeError::fs(path, e.at(path)))?;
        let outcome = self.header.apply(&content);
        // Unchanged files are left alone so their mtime survives
        if outcome.change != HeaderChange::Unchanged {
            self.fs
                .write(path, &outcome.content)
                .map_err(|e| IconforgeError::fs(path, e.at(path)))?;
        }
        Ok(outcome.change)
    }
}
