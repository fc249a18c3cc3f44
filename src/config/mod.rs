//! Configuration module for iconforge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICONFORGE_*)
//! 3. Project config (iconforge.toml at the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{
    ColorMode, ComponentsConfig, Config, CopyTarget, EnumConfig, HeadersConfig, OutputConfig,
    CONFIG_FILE_NAME,
};
