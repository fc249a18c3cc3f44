//! Build Use Case
//!
//! The full generation pipeline: enum, components, then the asset copy.
//! Enum and component failures abort the build; copy failures are collected
//! and left to the caller.

use std::path::PathBuf;

use crate::config::{Config, CopyTarget};
use crate::domain::ports::{FileSystem, PipelineEventSink};
use crate::error::IconforgeResult;

use super::components::{ComponentsOptions, ComponentsResult, ComponentsUseCase};
use super::copy_assets::{CopyResult, CopyUseCase};
use super::enum_gen::{EnumOptions, EnumResult, EnumUseCase};

/// Options for a full build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub project_root: PathBuf,
    pub enum_options: EnumOptions,
    pub components_options: ComponentsOptions,
    pub copy_targets: Vec<CopyTarget>,
}

impl BuildOptions {
    pub fn from_config(project_root: impl Into<PathBuf>, config: &Config) -> Self {
        let project_root = project_root.into();
        Self {
            enum_options: EnumOptions::from_config(project_root.clone(), &config.enum_gen),
            components_options: ComponentsOptions::from_config(
                project_root.clone(),
                &config.components,
            ),
            copy_targets: config.copy.clone(),
            project_root,
        }
    }
}

/// Result of a full build
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub enum_result: EnumResult,
    pub components: ComponentsResult,
    pub copy: CopyResult,
}

/// Full pipeline use case
pub struct BuildUseCase<FS: FileSystem + Clone> {
    fs: FS,
}

impl<FS: FileSystem + Clone> BuildUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute_with_events(
        &self,
        options: &BuildOptions,
        event_sink: &dyn PipelineEventSink,
    ) -> IconforgeResult<BuildResult> {
        let enum_result = EnumUseCase::new(self.fs.clone())
            .execute_with_events(&options.enum_options, event_sink)?;
        let components = ComponentsUseCase::new(self.fs.clone())
            .execute_with_events(&options.components_options, event_sink)?;
        let copy = CopyUseCase::new(self.fs.clone()).execute_with_events(
            &options.project_root,
            &options.copy_targets,
            event_sink,
        )?;

        Ok(BuildResult {
            enum_result,
            components,
            copy,
        })
    }
}
