//! Copy Use Case
//!
//! Copies named asset categories into the distribution, preserving nested
//! structure. Files are listed up front, destination directories are
//! created sequentially, then the copies run in parallel on rayon's pool and
//! are joined before the result is returned.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::CopyTarget;
use crate::domain::ports::{FileSystem, NoopEventSink, PipelineEvent, PipelineEventSink};
use crate::domain::services::scan_files;
use crate::error::{IconforgeError, IconforgeResult};

const STAGE: &str = "copy";

/// A file that could not be copied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    /// Source file (relative to the project root)
    pub path: PathBuf,
    pub error: String,
}

/// Aggregate result of a copy run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyResult {
    /// Copied destination files (relative to the project root)
    pub copied: Vec<PathBuf>,
    pub failures: Vec<CopyFailure>,
}

impl CopyResult {
    pub fn total(&self) -> usize {
        self.copied.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn per-file failures into a batch error
    pub fn ensure_success(&self) -> IconforgeResult<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(IconforgeError::BatchFailed {
            what: "copies",
            failed: self.failures.len(),
            total: self.total(),
        })
    }
}

/// Asset copy use case
pub struct CopyUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> CopyUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, project_root: &Path, targets: &[CopyTarget]) -> IconforgeResult<CopyResult> {
        self.execute_with_events(project_root, targets, &NoopEventSink)
    }

    /// Copy every target; a missing source directory aborts the run
    pub fn execute_with_events(
        &self,
        project_root: &Path,
        targets: &[CopyTarget],
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<CopyResult> {
        let mut result = CopyResult::default();
        for target in targets {
            event_sink.on_event(PipelineEvent::Started {
                stage: STAGE,
                source: target.source.clone(),
            });
            self.copy_target(project_root, target, &mut result, event_sink)?;
        }

        event_sink.on_event(PipelineEvent::Completed {
            stage: STAGE,
            written: result.copied.len(),
            failed: result.failures.len(),
        });
        Ok(result)
    }

    fn copy_target(
        &self,
        project_root: &Path,
        target: &CopyTarget,
        result: &mut CopyResult,
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<()> {
        let source_dir = project_root.join(&target.source);
        let target_dir = project_root.join(&target.target);

        let files = scan_files(&self.fs, &source_dir)?;
        event_sink.on_event(PipelineEvent::Scanned {
            stage: STAGE,
            count: files.len(),
        });
        if files.is_empty() {
            event_sink.on_event(PipelineEvent::EmptyDirectory {
                path: target.source.clone(),
            });
        }

        let relatives: Vec<PathBuf> = files
            .iter()
            .map(|file| file.strip_prefix(&source_dir).unwrap_or(file).to_path_buf())
            .collect();

        // Create directories first (sequential)
        let mut dirs = BTreeSet::new();
        dirs.insert(target_dir.clone());
        for relative in &relatives {
            if let Some(parent) = relative.parent() {
                dirs.insert(target_dir.join(parent));
            }
        }
        for dir in &dirs {
            self.fs
                .create_dir_all(dir)
                .map_err(|e| IconforgeError::fs(dir, e.at(dir)))?;
        }

        let outcomes: Vec<(PathBuf, Result<PathBuf, String>)> = relatives
            .par_iter()
            .map(|relative| {
                let from = source_dir.join(relative);
                let to = target_dir.join(relative);
                let outcome = match self.fs.copy_file(&from, &to) {
                    Ok(()) => {
                        event_sink.on_event(PipelineEvent::FileCopied {
                            from: target.source.join(relative),
                            to: target.target.join(relative),
                        });
                        Ok(target.target.join(relative))
                    }
                    Err(e) => {
                        let error = e.at(&from).to_string();
                        event_sink.on_event(PipelineEvent::ItemFailed {
                            path: target.source.join(relative),
                            error: error.clone(),
                        });
                        Err(error)
                    }
                };
                (target.source.join(relative), outcome)
            })
            .collect();

        for (path, outcome) in outcomes {
            match outcome {
                Ok(copied) => result.copied.push(copied),
                Err(error) => result.failures.push(CopyFailure { path, error }),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::pipeline_events::testing::RecordingEventSink;
    use crate::infrastructure::fs::MockFileSystem;
    use crate::infrastructure::LocalFs;
    use tempfile::tempdir;

    fn targets() -> Vec<CopyTarget> {
        vec![
            CopyTarget::new("illustrations", "optimizedIllustrations", "dist/illustrations"),
            CopyTarget::new("images", "optimizedImages", "dist/images"),
        ]
    }

    #[test]
    fn copies_nested_structure() {
        let fs = MockFileSystem::new();
        fs.add_file("/p/optimizedIllustrations/empty/state.svg", "<svg/>");
        fs.add_file("/p/optimizedIllustrations/hero.svg", "<svg/>");
        fs.add_file("/p/optimizedImages/photos/team.png", "png");

        let result = CopyUseCase::new(fs.clone())
            .execute(Path::new("/p"), &targets())
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.copied.len(), 3);
        assert_eq!(
            fs.content("/p/dist/illustrations/empty/state.svg").as_deref(),
            Some("<svg/>")
        );
        assert_eq!(
            fs.content("/p/dist/images/photos/team.png").as_deref(),
            Some("png")
        );
    }

    #[test]
    fn result_order_follows_scan_order() {
        let fs = MockFileSystem::new();
        fs.add_file("/p/optimizedIllustrations/b.svg", "b");
        fs.add_file("/p/optimizedIllustrations/a.svg", "a");
        fs.add_dir("/p/optimizedImages");

        let result = CopyUseCase::new(fs)
            .execute(Path::new("/p"), &targets())
            .unwrap();

        assert_eq!(
            result.copied,
            vec![
                PathBuf::from("dist/illustrations/a.svg"),
                PathBuf::from("dist/illustrations/b.svg"),
            ]
        );
    }

    #[test]
    fn failed_copy_is_reported_and_others_continue() {
        let fs = MockFileSystem::new();
        fs.add_file("/p/optimizedIllustrations/a.svg", "a");
        fs.add_file("/p/optimizedIllustrations/b.svg", "b");
        fs.add_dir("/p/optimizedImages");
        fs.break_path("/p/optimizedIllustrations/a.svg");
        let sink = RecordingEventSink::new();

        let result = CopyUseCase::new(fs.clone())
            .execute_with_events(Path::new("/p"), &targets(), &sink)
            .unwrap();

        assert_eq!(result.copied, vec![PathBuf::from("dist/illustrations/b.svg")]);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(
            result.failures[0].path,
            PathBuf::from("optimizedIllustrations/a.svg")
        );
        assert!(matches!(
            result.ensure_success(),
            Err(IconforgeError::BatchFailed { failed: 1, total: 2, .. })
        ));
        assert!(sink.recorded().iter().any(|e| matches!(
            e,
            PipelineEvent::Completed { stage: "copy", written: 1, failed: 1 }
        )));
    }

    #[test]
    fn missing_source_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_dir("/p/optimizedIllustrations");

        let err = CopyUseCase::new(fs)
            .execute(Path::new("/p"), &targets())
            .unwrap_err();

        assert!(matches!(err, IconforgeError::DirectoryNotFound { ref path } if path == Path::new("/p/optimizedImages")));
    }

    #[test]
    fn copies_on_local_disk() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("optimizedIllustrations/deep/er")).unwrap();
        std::fs::write(root.join("optimizedIllustrations/deep/er/x.svg"), "<svg/>").unwrap();
        std::fs::create_dir_all(root.join("optimizedImages")).unwrap();

        let result = CopyUseCase::new(LocalFs::new())
            .execute(root, &targets())
            .unwrap();

        assert_eq!(result.copied.len(), 1);
        assert!(root.join("dist/illustrations/deep/er/x.svg").is_file());
        assert!(root.join("dist/images").is_dir());
    }
}
