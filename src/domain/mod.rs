//! Domain Layer
//!
//! Naming, emission and header rules, free of direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Generated artifacts and manifests
//! - `value_objects/` - Icon paths and component names
//! - `services/` - Scanner, emitter, license header
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
