//! Domain Services
//!
//! Stateless logic for scanning, code emission, diffing and header
//! maintenance.
//! Only the scanner touches the file system, and only through the port.

pub mod differ;
pub mod emitter;
pub mod license_header;
pub mod scanner;

pub use differ::{DiffResult, Differ};
pub use license_header::{HeaderChange, HeaderOutcome, LicenseHeader, DEFAULT_HEADER_DIRS};
pub use scanner::{scan_assets, scan_files, ScanFilter, TreeScanner};
