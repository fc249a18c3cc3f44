//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_HEADER_DIRS;
use crate::error::IconforgeResult;

use super::loader::{self, ConfigWarning};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "iconforge.toml";

/// Enum generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConfig {
    /// Category directory scanned for `<size>px/<name>.svg`
    #[serde(default = "default_icons_dir")]
    pub source: PathBuf,

    /// Generated TypeScript enum
    #[serde(default = "default_enum_output")]
    pub output: PathBuf,
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            source: default_icons_dir(),
            output: default_enum_output(),
        }
    }
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_enum_output() -> PathBuf {
    PathBuf::from("src/icons.ts")
}

/// Component generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentsConfig {
    /// Optimized SVG tree
    #[serde(default = "default_optimized_dir")]
    pub source: PathBuf,

    /// Directory receiving generated components; cleared on every run
    #[serde(default = "default_generated_dir")]
    pub output: PathBuf,

    /// Package source directory the generated files are mirrored into
    #[serde(default = "default_package_src")]
    pub package_src: PathBuf,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            source: default_optimized_dir(),
            output: default_generated_dir(),
            package_src: default_package_src(),
        }
    }
}

fn default_optimized_dir() -> PathBuf {
    PathBuf::from("optimized")
}

fn default_generated_dir() -> PathBuf {
    PathBuf::from("reactGenerated")
}

fn default_package_src() -> PathBuf {
    PathBuf::from("src")
}

/// One named asset category copied into the distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyTarget {
    pub name: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl CopyTarget {
    pub fn new(name: &str, source: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            source: PathBuf::from(source),
            target: PathBuf::from(target),
        }
    }
}

fn default_copy_targets() -> Vec<CopyTarget> {
    vec![
        CopyTarget::new("illustrations", "optimizedIllustrations", "dist/illustrations"),
        CopyTarget::new("images", "optimizedImages", "dist/images"),
    ]
}

/// License header job configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadersConfig {
    #[serde(default = "default_header_dirs")]
    pub directories: Vec<PathBuf>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            directories: default_header_dirs(),
        }
    }
}

fn default_header_dirs() -> Vec<PathBuf> {
    DEFAULT_HEADER_DIRS.iter().map(PathBuf::from).collect()
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "enum", default)]
    pub enum_gen: EnumConfig,

    #[serde(default)]
    pub components: ComponentsConfig,

    #[serde(default = "default_copy_targets")]
    pub copy: Vec<CopyTarget>,

    #[serde(default)]
    pub headers: HeadersConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enum_gen: EnumConfig::default(),
            components: ComponentsConfig::default(),
            copy: default_copy_targets(),
            headers: HeadersConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load `iconforge.toml` from the project root (or an explicit file),
    /// falling back to defaults, then apply `ICONFORGE_*` overrides.
    pub fn load_for_project(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> IconforgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root, explicit)
    }
}
