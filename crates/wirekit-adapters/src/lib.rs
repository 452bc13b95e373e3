//! Infrastructure adapters for Wirekit.
//!
//! This crate implements the ports defined in
//! `wirekit_core::application::ports` and provides the descriptor sources
//! the core stays agnostic of: the TOML manifest the code generator emits,
//! and link-time declarations collected via `inventory`.

pub mod container;
pub mod discovery;
pub mod manifest;

// Re-export commonly used adapters
pub use container::{RecordingContainer, RuntimeContainer, Scope};
pub use discovery::ServiceDecl;
pub use manifest::load_manifest;
