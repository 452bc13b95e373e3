//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// Classification itself never fails — a non-conforming descriptor is a
/// skip, not an error. Domain errors only arise from structurally invalid
/// descriptors, which cannot have come from the generator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid type descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },
}

impl DomainError {
    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDescriptor { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
