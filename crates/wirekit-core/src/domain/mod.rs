//! Domain layer: pure classification logic, no I/O.
//!
//! Everything in here is a function of its inputs. The container, the
//! manifest file, and the tracing subscriber all live elsewhere.

pub mod convention;
pub mod descriptor;
pub mod error;
pub mod lifetime;

pub use convention::{
    Classification, INTERFACE_MARKER, Outcome, RegistrationEntry, SkipReason, classify,
    expected_interface, plan,
};
pub use descriptor::TypeDescriptor;
pub use error::{DomainError, ErrorCategory};
pub use lifetime::Lifetime;
