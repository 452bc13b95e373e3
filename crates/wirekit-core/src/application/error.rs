//! Application layer errors.
//!
//! These errors represent failures in container interaction and descriptor
//! ingestion, not classification logic. A type that merely fails the naming
//! convention is a *skip*, never an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while populating or using a container.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An interface was registered a second time.
    #[error("Interface already registered: {interface}")]
    DuplicateRegistration { interface: String },

    /// Resolution or binding referenced an interface with no catalog entry.
    #[error("Service not registered: {interface}")]
    ServiceNotRegistered { interface: String },

    /// A catalog entry exists but no factory was bound to it.
    #[error("No factory bound for interface: {interface}")]
    FactoryNotBound { interface: String },

    /// A bound factory produced an instance of an unexpected type.
    #[error("Resolved instance for {interface} has an unexpected type")]
    TypeMismatch { interface: String },

    /// A scoped service was resolved without a scope.
    #[error("Scoped service {interface} requires a scope")]
    ScopeRequired { interface: String },

    /// Container lock poisoned by a panicking writer.
    #[error("Container lock poisoned")]
    ContainerLockError,

    /// A descriptor manifest could not be read or parsed.
    #[error("Manifest error at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateRegistration { interface } => vec![
                format!("'{interface}' is mapped to two implementations"),
                "Each interface may be registered exactly once per container".into(),
                "Check the descriptor set for duplicated type names".into(),
            ],
            Self::ServiceNotRegistered { interface } => vec![
                format!("No registration exists for '{interface}'"),
                "Run the registrar before binding or resolving".into(),
                "Use 'wirekit check' on the manifest to see what registered".into(),
            ],
            Self::FactoryNotBound { interface } => vec![
                format!("'{interface}' was declared but no constructor was bound"),
                "Bind a factory after registration, before the first resolve".into(),
            ],
            Self::ScopeRequired { interface } => vec![
                format!("'{interface}' has scoped lifetime"),
                "Resolve it through resolve_in with an explicit scope".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Failed to load: {}", path.display()),
                "Check that the file exists and is valid TOML".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateRegistration { .. } => ErrorCategory::Validation,
            Self::ServiceNotRegistered { .. } => ErrorCategory::NotFound,
            Self::FactoryNotBound { .. } => ErrorCategory::Configuration,
            Self::TypeMismatch { .. } => ErrorCategory::Internal,
            Self::ScopeRequired { .. } => ErrorCategory::Validation,
            Self::ContainerLockError => ErrorCategory::Internal,
            Self::ManifestError { .. } => ErrorCategory::Validation,
        }
    }
}
