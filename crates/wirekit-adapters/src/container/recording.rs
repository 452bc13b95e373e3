//! Recording container: collects entries without constructing anything.

use std::sync::{Arc, RwLock};

use wirekit_core::{
    application::{ApplicationError, ports::ServiceContainer},
    domain::{Lifetime, RegistrationEntry},
    error::WirekitResult,
};

/// Thread-safe container that records registration entries verbatim.
///
/// Used for tests and for `wirekit check`, where the question is *what
/// would be registered*, not *what can be constructed*. Clones share the
/// same entry log, so a handle kept before boxing the container into a
/// registrar still sees everything the pass recorded.
#[derive(Clone)]
pub struct RecordingContainer {
    inner: Arc<RwLock<Vec<RegistrationEntry>>>,
}

impl RecordingContainer {
    /// Create an empty recording container.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of the recorded entries, in registration order.
    pub fn entries(&self) -> WirekitResult<Vec<RegistrationEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::ContainerLockError)?;
        Ok(inner.clone())
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lifetime recorded for an interface, if any.
    pub fn lifetime_of(&self, interface: &str) -> Option<Lifetime> {
        self.inner
            .read()
            .ok()?
            .iter()
            .find(|e| e.interface == interface)
            .map(|e| e.lifetime)
    }

    /// Check whether an interface was registered.
    pub fn contains(&self, interface: &str) -> bool {
        self.lifetime_of(interface).is_some()
    }

    fn record(
        &self,
        interface: &str,
        implementation: &str,
        lifetime: Lifetime,
    ) -> WirekitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ContainerLockError)?;

        // One mapping per interface; the registrar propagates this as fatal.
        if inner.iter().any(|e| e.interface == interface) {
            return Err(ApplicationError::DuplicateRegistration {
                interface: interface.into(),
            }
            .into());
        }

        inner.push(RegistrationEntry {
            interface: interface.into(),
            implementation: implementation.into(),
            lifetime,
        });
        Ok(())
    }
}

impl Default for RecordingContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceContainer for RecordingContainer {
    fn register_singleton(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.record(interface, implementation, Lifetime::Singleton)
    }

    fn register_transient(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.record(interface, implementation, Lifetime::Transient)
    }

    fn register_scoped(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.record(interface, implementation, Lifetime::Scoped)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
