//! Common test utilities for iconforge CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus CLI runner
//! - Fixtures: SVG bodies and project layouts

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
