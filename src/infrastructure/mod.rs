//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, plus an in-memory mock for tests)

pub mod fs;

pub use fs::LocalFs;
