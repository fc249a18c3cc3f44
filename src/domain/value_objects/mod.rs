//! Domain Value Objects
//!
//! Immutable value types for the two naming strategies. The enum path and
//! the component path derive names independently.

mod asset_path;
mod component_name;

pub use asset_path::{is_asset, size_value, IconPath, ASSET_EXTENSION, SIZE_UNIT};
pub use component_name::{component_suffix, pascal_case, ComponentName, OPTIMIZED_MARKER};
