//! Components Use Case
//!
//! Orchestrates component generation:
//! 1. Clear the output directory
//! 2. Scan the optimized tree and derive component names
//! 3. Emit one component and type declaration per asset, plus one index
//!    fragment per source directory
//! 4. Write everything, then mirror the output directory into the package
//!    source directory

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::ComponentsConfig;
use crate::domain::entities::{ExportIndex, GeneratedArtifact};
use crate::domain::ports::{FileSystem, NoopEventSink, PipelineEvent, PipelineEventSink};
use crate::domain::services::{emitter, scan_assets, scan_files};
use crate::domain::value_objects::ComponentName;
use crate::error::{IconforgeError, IconforgeResult};

use super::writer::ArtifactWriter;

const STAGE: &str = "components";

/// Options for the components use case
#[derive(Debug, Clone)]
pub struct ComponentsOptions {
    pub project_root: PathBuf,
    /// Optimized SVG tree
    pub source: PathBuf,
    /// Generated component directory
    pub output: PathBuf,
    /// Directory the generated files are mirrored into (None = no mirror)
    pub package_src: Option<PathBuf>,
}

impl ComponentsOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::from_config(project_root, &ComponentsConfig::default())
    }

    pub fn from_config(project_root: impl Into<PathBuf>, config: &ComponentsConfig) -> Self {
        Self {
            project_root: project_root.into(),
            source: config.source.clone(),
            output: config.output.clone(),
            package_src: Some(config.package_src.clone()),
        }
    }

    /// Skip the package source mirror
    pub fn without_mirror(mut self) -> Self {
        self.package_src = None;
        self
    }
}

/// Artifacts of one generation run, in write order
#[derive(Debug, Clone, Default)]
pub struct ComponentPlan {
    pub artifacts: Vec<GeneratedArtifact>,
    /// Number of generated components
    pub components: usize,
    /// Number of source directories that contributed an index fragment
    pub directories: usize,
}

/// Result of a components run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentsResult {
    pub components: usize,
    /// Artifacts written to the output directory
    pub written: usize,
    /// Files mirrored into the package source directory
    pub mirrored: usize,
}

/// Component generation use case
pub struct ComponentsUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> ComponentsUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Compute every artifact without touching the output directory
    pub fn plan(&self, options: &ComponentsOptions) -> IconforgeResult<ComponentPlan> {
        let source_dir = options.project_root.join(&options.source);
        let files = scan_assets(&self.fs, &source_dir)?;

        // Only assets inside subdirectories become components
        let mut by_directory: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
        for file in files {
            let parent = file.parent().map(Path::to_path_buf).unwrap_or_default();
            if parent == source_dir {
                continue;
            }
            by_directory.entry(parent).or_default().push(file);
        }

        let mut plan = ComponentPlan::default();
        let mut index = ExportIndex::new();
        for files in by_directory.values() {
            let mut names = Vec::with_capacity(files.len());
            for file in files {
                let relative = file.strip_prefix(&source_dir).unwrap_or(file);
                let name = ComponentName::derive(relative)?;
                index.register(&name, relative.to_path_buf())?;

                let svg = self
                    .fs
                    .read(file)
                    .map_err(|e| IconforgeError::fs(file, e.at(file)))?;
                plan.artifacts
                    .extend(emitter::component_artifacts(&name, &svg, &options.output));
                names.push(name);
            }

            let fragment = emitter::export_fragment(&names);
            plan.artifacts
                .extend(emitter::index_artifacts(&fragment, &options.output));
            plan.directories += 1;
        }
        plan.components = index.len();
        Ok(plan)
    }

    pub fn execute(&self, options: &ComponentsOptions) -> IconforgeResult<ComponentsResult> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Regenerate the component package, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &ComponentsOptions,
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<ComponentsResult> {
        event_sink.on_event(PipelineEvent::Started {
            stage: STAGE,
            source: options.source.clone(),
        });

        let plan = self.plan(options)?;
        event_sink.on_event(PipelineEvent::Scanned {
            stage: STAGE,
            count: plan.components,
        });
        if plan.components == 0 {
            event_sink.on_event(PipelineEvent::EmptyDirectory {
                path: options.source.clone(),
            });
        }

        // Index files are appended per directory, so each run starts clean
        let output_dir = options.project_root.join(&options.output);
        if self.fs.is_dir(&output_dir) {
            self.fs
                .remove_dir_all(&output_dir)
                .map_err(|e| IconforgeError::fs(&output_dir, e.at(&output_dir)))?;
        }
        self.fs
            .create_dir_all(&output_dir)
            .map_err(|e| IconforgeError::fs(&output_dir, e.at(&output_dir)))?;

        let writer = ArtifactWriter::new(&self.fs, &options.project_root);
        let written = writer.write_all(&plan.artifacts, event_sink)?;

        let mirrored = match &options.package_src {
            Some(package_src) => self.mirror(options, package_src, event_sink)?,
            None => 0,
        };

        event_sink.on_event(PipelineEvent::Completed {
            stage: STAGE,
            written,
            failed: 0,
        });

        Ok(ComponentsResult {
            components: plan.components,
            written,
            mirrored,
        })
    }

    /// Deep-copy the output directory into the package source directory
    fn mirror(
        &self,
        options: &ComponentsOptions,
        package_src: &Path,
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<usize> {
        let output_dir = options.project_root.join(&options.output);
        let target_dir = options.project_root.join(package_src);

        let files = scan_files(&self.fs, &output_dir)?;
        for file in &files {
            let relative = file.strip_prefix(&output_dir).unwrap_or(file);
            let target = target_dir.join(relative);
            self.fs
                .copy_file(file, &target)
                .map_err(|e| IconforgeError::fs(file, e.at(file)))?;
            event_sink.on_event(PipelineEvent::FileCopied {
                from: options.output.join(relative),
                to: package_src.join(relative),
            });
        }
        Ok(files.len())
    }
}
