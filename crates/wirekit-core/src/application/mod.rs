//! Application layer for Wirekit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RegistrarService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! classification logic itself. All convention rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export the main service and its report types
pub use services::{RegistrarService, ScanReport, SkippedType};

// Re-export port traits (for adapter implementation)
pub use ports::ServiceContainer;

pub use error::ApplicationError;
