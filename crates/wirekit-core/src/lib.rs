//! Wirekit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Wirekit,
//! the service-registration layer of a code-generation-driven application
//! framework, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        host startup / wirekit-cli       │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (RegistrarService)            │
//! │      Orchestrates the startup pass      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: ServiceContainer)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wirekit-adapters (Infrastructure)    │
//! │  (RuntimeContainer, RecordingContainer) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Lifetime, TypeDescriptor, classify)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use wirekit_core::{
//!     application::{RegistrarService, ports::ServiceContainer},
//!     domain::{Lifetime, TypeDescriptor},
//!     error::WirekitResult,
//! };
//!
//! // A real host injects a container adapter from `wirekit-adapters`.
//! struct NullContainer;
//! impl ServiceContainer for NullContainer {
//!     fn register_singleton(&self, _: &str, _: &str) -> WirekitResult<()> { Ok(()) }
//!     fn register_transient(&self, _: &str, _: &str) -> WirekitResult<()> { Ok(()) }
//!     fn register_scoped(&self, _: &str, _: &str) -> WirekitResult<()> { Ok(()) }
//! }
//!
//! // 1. Describe the generated types
//! let descriptors = vec![
//!     TypeDescriptor::new("UserStore")
//!         .with_capability(Lifetime::Singleton)
//!         .with_interface("IUserStore"),
//! ];
//!
//! // 2. Run the registrar
//! let registrar = RegistrarService::new(Box::new(NullContainer));
//! let report = registrar.register_all(&descriptors).unwrap();
//! assert_eq!(report.registered_count(), 1);
//! ```
//!
//! The convention itself — type `Foo` registers under interface `IFoo`,
//! lifetime resolved from the declared capabilities — lives in
//! [`domain::convention`]; a type that does not follow it is skipped
//! without error.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RegistrarService, ScanReport, SkippedType, ports::ServiceContainer,
    };
    pub use crate::domain::{
        Classification, Lifetime, Outcome, RegistrationEntry, SkipReason, TypeDescriptor,
        classify, expected_interface, plan,
    };
    pub use crate::error::{WirekitError, WirekitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
