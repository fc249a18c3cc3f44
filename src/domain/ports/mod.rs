//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod pipeline_events;

pub use file_system::{EntryKind, FileSystem, FsEntry, FsError, FsResult};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
