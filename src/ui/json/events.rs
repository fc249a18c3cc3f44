//! Shared JSON event types for consistent CLI output.

use serde::Serialize;
use serde_json::json;

use iconforge::application::DiffEntry;
use iconforge::domain::ports::PipelineEvent;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            written: None,
            failed: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }

    pub fn with_counts(mut self, written: usize, failed: usize) -> Self {
        self.written = Some(written);
        self.failed = Some(failed);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// One file of the drift check.
#[derive(Debug, Clone, Serialize)]
pub struct DiffEntryEvent {
    pub event: &'static str,
    pub path: String,
    pub change: String,
    pub additions: usize,
    pub deletions: usize,
}

impl From<&DiffEntry> for DiffEntryEvent {
    fn from(entry: &DiffEntry) -> Self {
        Self {
            event: "diff_entry",
            path: entry.path.display().to_string(),
            change: entry.change_type.to_string(),
            additions: entry.diff.additions,
            deletions: entry.diff.deletions,
        }
    }
}

/// NDJSON object for a pipeline event.
pub fn pipeline_event(event: &PipelineEvent) -> serde_json::Value {
    match event {
        PipelineEvent::Started { stage, source } => json!({
            "event": "stage_start",
            "stage": stage,
            "source": source.display().to_string(),
        }),
        PipelineEvent::Scanned { stage, count } => json!({
            "event": "scanned",
            "stage": stage,
            "count": count,
        }),
        PipelineEvent::ArtifactWritten { path } => json!({
            "event": "artifact_written",
            "path": path.display().to_string(),
        }),
        PipelineEvent::EmptyDirectory { path } => json!({
            "event": "warning",
            "message": format!("no assets found in {}", path.display()),
        }),
        PipelineEvent::FileCopied { from, to } => json!({
            "event": "file_copied",
            "from": from.display().to_string(),
            "to": to.display().to_string(),
        }),
        PipelineEvent::HeaderInserted { path } => header_updated(path, "inserted"),
        PipelineEvent::HeaderReplaced { path } => header_updated(path, "replaced"),
        PipelineEvent::HeaderUnchanged { path } => header_updated(path, "unchanged"),
        PipelineEvent::Warning { message } => json!({
            "event": "warning",
            "message": message,
        }),
        PipelineEvent::ItemFailed { path, error } => json!({
            "event": "item_failed",
            "path": path.display().to_string(),
            "error": error,
        }),
        PipelineEvent::Completed {
            stage,
            written,
            failed,
        } => json!({
            "event": "stage_complete",
            "stage": stage,
            "written": written,
            "failed": failed,
        }),
    }
}

fn header_updated(path: &std::path::Path, change: &str) -> serde_json::Value {
    json!({
        "event": "header_updated",
        "path": path.display().to_string(),
        "change": change,
    })
}
