//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wirekit-adapters` crate provides implementations.

use crate::domain::RegistrationEntry;
use crate::error::WirekitResult;

/// Port for the service container being populated.
///
/// Implemented by:
/// - `wirekit_adapters::container::RuntimeContainer` (production)
/// - `wirekit_adapters::container::RecordingContainer` (inspection, testing)
///
/// ## Design Notes
///
/// - Identities are interface/implementation *names*; instance construction
///   is the container's concern, behind this port.
/// - Methods take `&self`: containers are shared after startup, so they use
///   interior locking.
/// - A container may reject a registration (e.g. a duplicate interface);
///   the registrar propagates such errors unmodified.
pub trait ServiceContainer: Send + Sync {
    /// Map `interface` to `implementation` with one process-wide instance.
    fn register_singleton(&self, interface: &str, implementation: &str) -> WirekitResult<()>;

    /// Map `interface` to `implementation` with a fresh instance per
    /// resolution.
    fn register_transient(&self, interface: &str, implementation: &str) -> WirekitResult<()>;

    /// Map `interface` to `implementation` with one instance per unit of
    /// work.
    fn register_scoped(&self, interface: &str, implementation: &str) -> WirekitResult<()>;

    /// Dispatch an entry to the registration operation matching its
    /// lifetime.
    fn register(&self, entry: &RegistrationEntry) -> WirekitResult<()> {
        use crate::domain::Lifetime;
        match entry.lifetime {
            Lifetime::Singleton => self.register_singleton(&entry.interface, &entry.implementation),
            Lifetime::Transient => self.register_transient(&entry.interface, &entry.implementation),
            Lifetime::Scoped => self.register_scoped(&entry.interface, &entry.implementation),
        }
    }
}
