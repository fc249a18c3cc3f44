//! Artifact Writer
//!
//! Persists generated artifacts through the `FileSystem` port. Generation
//! paths are fail-fast: the first failed write aborts the batch.

use std::path::Path;

use crate::domain::entities::{GeneratedArtifact, WriteMode};
use crate::domain::ports::{FileSystem, PipelineEvent, PipelineEventSink};
use crate::error::{IconforgeError, IconforgeResult};

/// Writes artifacts below a project root
pub struct ArtifactWriter<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    root: &'a Path,
}

impl<'a, FS: FileSystem + ?Sized> ArtifactWriter<'a, FS> {
    pub fn new(fs: &'a FS, root: &'a Path) -> Self {
        Self { fs, root }
    }

    /// Write one artifact according to its mode
    pub fn write(&self, artifact: &GeneratedArtifact) -> IconforgeResult<()> {
        let target = self.root.join(artifact.path());
        let written = match artifact.mode() {
            WriteMode::Overwrite => self.fs.write(&target, artifact.content()),
            WriteMode::Append => self.fs.append(&target, artifact.content()),
        };
        written.map_err(|e| IconforgeError::fs(&target, e.at(&target)))
    }

    /// Write artifacts in order, stopping at the first failure
    ///
    /// Returns the number of artifacts written.
    pub fn write_all(
        &self,
        artifacts: &[GeneratedArtifact],
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<usize> {
        for artifact in artifacts {
            self.write(artifact)?;
            event_sink.on_event(PipelineEvent::ArtifactWritten {
                path: artifact.path().to_path_buf(),
            });
        }
        Ok(artifacts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::pipeline_events::testing::RecordingEventSink;
    use crate::infrastructure::fs::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn write_all_applies_modes_in_order() {
        let fs = MockFileSystem::new();
        let sink = RecordingEventSink::new();
        let root = Path::new("/project");
        let writer = ArtifactWriter::new(&fs, root);

        let artifacts = vec![
            GeneratedArtifact::new("out/A.tsx", "a"),
            GeneratedArtifact::append("out/index.tsx", "one\n"),
            GeneratedArtifact::append("out/index.tsx", "two\n"),
        ];

        let written = writer.write_all(&artifacts, &sink).unwrap();

        assert_eq!(written, 3);
        assert_eq!(fs.content("/project/out/A.tsx").as_deref(), Some("a"));
        assert_eq!(
            fs.content("/project/out/index.tsx").as_deref(),
            Some("one\ntwo\n")
        );
        assert_eq!(
            sink.recorded()[0],
            PipelineEvent::ArtifactWritten {
                path: PathBuf::from("out/A.tsx")
            }
        );
    }

    #[test]
    fn write_all_stops_at_first_failure() {
        let fs = MockFileSystem::new();
        fs.break_path("/project/out/B.tsx");
        let sink = RecordingEventSink::new();
        let writer = ArtifactWriter::new(&fs, Path::new("/project"));

        let artifacts = vec![
            GeneratedArtifact::new("out/A.tsx", "a"),
            GeneratedArtifact::new("out/B.tsx", "b"),
            GeneratedArtifact::new("out/C.tsx", "c"),
        ];

        let err = writer.write_all(&artifacts, &sink).unwrap_err();

        assert_eq!(err.path(), Some(Path::new("/project/out/B.tsx")));
        assert!(fs.content("/project/out/C.tsx").is_none());
        assert_eq!(sink.recorded().len(), 1);
    }
}
