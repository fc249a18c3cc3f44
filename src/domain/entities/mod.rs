//! Domain Entities

mod artifact;
mod manifest;

pub use artifact::{fold_artifacts, GeneratedArtifact, WriteMode};
pub use manifest::{enum_line, ExportIndex, IconManifest, ENUM_FOOTER, ENUM_HEADER};
