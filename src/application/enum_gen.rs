//! Enum Use Case
//!
//! Orchestrates enum generation:
//! 1. Scan the icon category directory
//! 2. Parse every asset path and collect the manifest
//! 3. Emit and write the TypeScript enum

use std::path::{Path, PathBuf};

use crate::config::EnumConfig;
use crate::domain::entities::{GeneratedArtifact, IconManifest};
use crate::domain::ports::{FileSystem, NoopEventSink, PipelineEvent, PipelineEventSink};
use crate::domain::services::{emitter, scan_assets};
use crate::domain::value_objects::IconPath;
use crate::error::IconforgeResult;

use super::writer::ArtifactWriter;

const STAGE: &str = "enum";

/// Options for the enum use case
#[derive(Debug, Clone)]
pub struct EnumOptions {
    /// Project root all other paths are relative to
    pub project_root: PathBuf,
    /// Category directory, e.g. `icons`
    pub source: PathBuf,
    /// Generated enum file
    pub output: PathBuf,
}

impl EnumOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::from_config(project_root, &EnumConfig::default())
    }

    pub fn from_config(project_root: impl Into<PathBuf>, config: &EnumConfig) -> Self {
        Self {
            project_root: project_root.into(),
            source: config.source.clone(),
            output: config.output.clone(),
        }
    }
}

/// Result of an enum run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumResult {
    /// Written enum file (relative to the project root)
    pub output: PathBuf,
    /// Number of enum members
    pub count: usize,
}

/// Enum generation use case
pub struct EnumUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> EnumUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Build the manifest without writing anything
    pub fn manifest(&self, options: &EnumOptions) -> IconforgeResult<IconManifest> {
        let source_dir = options.project_root.join(&options.source);
        // Asset paths are parsed relative to the category's parent so the
        // category directory is the first segment.
        let base = source_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| options.project_root.clone());

        let mut manifest = IconManifest::new();
        for file in scan_assets(&self.fs, &source_dir)? {
            let relative = file.strip_prefix(&base).unwrap_or(&file);
            manifest.insert(&IconPath::parse(relative)?)?;
        }
        Ok(manifest)
    }

    /// Compute the enum artifact (path relative to the project root)
    pub fn plan(&self, options: &EnumOptions) -> IconforgeResult<GeneratedArtifact> {
        let manifest = self.manifest(options)?;
        Ok(emitter::enum_artifact(&manifest, &options.output))
    }

    pub fn execute(&self, options: &EnumOptions) -> IconforgeResult<EnumResult> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Generate and write the enum, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &EnumOptions,
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<EnumResult> {
        event_sink.on_event(PipelineEvent::Started {
            stage: STAGE,
            source: options.source.clone(),
        });

        let manifest = self.manifest(options)?;
        event_sink.on_event(PipelineEvent::Scanned {
            stage: STAGE,
            count: manifest.len(),
        });
        if manifest.is_empty() {
            event_sink.on_event(PipelineEvent::EmptyDirectory {
                path: options.source.clone(),
            });
        }

        let artifact = emitter::enum_artifact(&manifest, &options.output);
        let writer = ArtifactWriter::new(&self.fs, &options.project_root);
        let written = writer.write_all(std::slice::from_ref(&artifact), event_sink)?;

        event_sink.on_event(PipelineEvent::Completed {
            stage: STAGE,
            written,
            failed: 0,
        });

        Ok(EnumResult {
            output: options.output.clone(),
            count: manifest.len(),
        })
    }
}
