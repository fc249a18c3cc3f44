//! Application Layer
//!
//! Use cases that orchestrate the pipeline stages.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain naming or emission rules (those are in Domain)
//! - Reports progress through `PipelineEventSink`
//!
//! ## Use Cases
//!
//! - `EnumUseCase` - Scan icons, write the TypeScript enum
//! - `ComponentsUseCase` - Generate React components and the index, mirror into `src`
//! - `CopyUseCase` - Parallel copy of illustrations and images into `dist`
//! - `HeadersUseCase` - Best-effort license header maintenance
//! - `BuildUseCase` - Enum, components and copy in sequence
//! - `DiffUseCase` - Compare generated output with the files on disk

pub mod build;
pub mod components;
pub mod copy_assets;
pub mod diff;
pub mod enum_gen;
pub mod headers;
mod writer;

pub use build::{BuildOptions, BuildResult, BuildUseCase};
pub use components::{ComponentPlan, ComponentsOptions, ComponentsResult, ComponentsUseCase};
pub use copy_assets::{CopyFailure, CopyResult, CopyUseCase};
pub use diff::{ChangeType, DiffEntry, DiffResult, DiffUseCase};
pub use enum_gen::{EnumOptions, EnumResult, EnumUseCase};
pub use headers::{HeaderFailure, HeadersResult, HeadersUseCase};
pub use writer::ArtifactWriter;
