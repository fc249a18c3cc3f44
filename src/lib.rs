//! iconforge - SVG icon asset pipeline
//!
//! Turns a tree of categorized, size-bucketed SVG files into the artifacts a
//! front-end icon package ships: a TypeScript enum of icon identifiers, one
//! React component per asset with an index, license headers on the sources,
//! and a copy of the optimized raster/vector assets into the distribution.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use error::{IconforgeError, IconforgeResult};
