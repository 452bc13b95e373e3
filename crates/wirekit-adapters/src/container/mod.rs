//! Container adapters implementing the `ServiceContainer` port.

pub mod recording;
pub mod runtime;

pub use recording::RecordingContainer;
pub use runtime::{RuntimeContainer, Scope};
