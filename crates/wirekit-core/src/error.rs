//! Unified error handling for Wirekit Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Wirekit Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// wirekit-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum WirekitError {
    /// Errors from the domain layer (malformed descriptors).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (container interaction).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl WirekitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => vec![
                format!("Descriptor problem: {e}"),
                "Regenerate the manifest; hand-edited entries are the usual cause".into(),
            ],
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type WirekitResult<T> = Result<T, WirekitError>;
