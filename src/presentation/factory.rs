//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    BuildUseCase, ComponentsUseCase, CopyUseCase, DiffUseCase, EnumUseCase, HeadersUseCase,
};
use crate::infrastructure::LocalFs;

/// Type alias for the concrete EnumUseCase
pub type ConcreteEnumUseCase = EnumUseCase<LocalFs>;

/// Type alias for the concrete ComponentsUseCase
pub type ConcreteComponentsUseCase = ComponentsUseCase<LocalFs>;

/// Type alias for the concrete CopyUseCase
pub type ConcreteCopyUseCase = CopyUseCase<LocalFs>;

/// Type alias for the concrete HeadersUseCase
pub type ConcreteHeadersUseCase = HeadersUseCase<LocalFs>;

/// Type alias for the concrete BuildUseCase
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs>;

/// Type alias for the concrete DiffUseCase
pub type ConcreteDiffUseCase = DiffUseCase<LocalFs>;

pub fn create_enum_use_case() -> ConcreteEnumUseCase {
    EnumUseCase::new(LocalFs::new())
}

pub fn create_components_use_case() -> ConcreteComponentsUseCase {
    ComponentsUseCase::new(LocalFs::new())
}

pub fn create_copy_use_case() -> ConcreteCopyUseCase {
    CopyUseCase::new(LocalFs::new())
}

/// Headers use case stamping the current calendar year
pub fn create_headers_use_case() -> ConcreteHeadersUseCase {
    HeadersUseCase::new(LocalFs::new())
}

pub fn create_build_use_case() -> ConcreteBuildUseCase {
    BuildUseCase::new(LocalFs::new())
}

pub fn create_diff_use_case() -> ConcreteDiffUseCase {
    DiffUseCase::new(LocalFs::new())
}
