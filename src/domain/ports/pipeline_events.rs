//! Pipeline Event Port
//!
//! Use cases report progress through this port; the CLI renders the events
//! as human-readable lines or as an NDJSON stream.

use std::path::PathBuf;

/// Event emitted while a pipeline stage runs
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// Stage started scanning its source directory
    Started { stage: &'static str, source: PathBuf },

    /// Scanner finished
    Scanned { stage: &'static str, count: usize },

    /// A generated artifact was persisted
    ArtifactWritten { path: PathBuf },

    /// A source directory produced no assets
    EmptyDirectory { path: PathBuf },

    /// A file was copied
    FileCopied { from: PathBuf, to: PathBuf },

    /// License header inserted into a file that had none
    HeaderInserted { path: PathBuf },

    /// Existing license header replaced
    HeaderReplaced { path: PathBuf },

    /// File already carried the current header
    HeaderUnchanged { path: PathBuf },

    /// Non-fatal problem
    Warning { message: String },

    /// One item of a best-effort batch failed; processing continues
    ItemFailed { path: PathBuf, error: String },

    /// Stage finished
    Completed {
        stage: &'static str,
        written: usize,
        failed: usize,
    },
}

/// Trait for receiving pipeline events
///
/// Implementations:
/// - `ConsoleEventSink` (binary): terminal output
/// - `JsonEventSink` (binary): NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait PipelineEventSink: Send + Sync {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingEventSink;
    use super::*;

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::new();

        sink.on_event(PipelineEvent::Started {
            stage: "enum",
            source: PathBuf::from("icons"),
        });
        sink.on_event(PipelineEvent::ArtifactWritten {
            path: PathBuf::from("src/icons.ts"),
        });

        assert_eq!(sink.recorded().len(), 2);
    }
}
