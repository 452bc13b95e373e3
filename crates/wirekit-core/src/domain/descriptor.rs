//! Type descriptors: what the registrar knows about one declared type.

use crate::domain::error::DomainError;
use crate::domain::lifetime::Lifetime;

/// Description of one type emitted by the code generator.
///
/// Read-only once constructed — the registrar only inspects descriptors, it
/// never mutates them. Descriptors arrive from the manifest loader, from
/// link-time declarations, or are built directly in host code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Simple (unqualified) type name, e.g. `UserStore`.
    pub name: String,

    /// Abstract types are never registered, regardless of what else they
    /// declare.
    pub is_abstract: bool,

    /// Declared lifecycle capabilities. Usually exactly one; see
    /// [`Lifetime::PRIORITY`] for how multiples are resolved.
    pub capabilities: Vec<Lifetime>,

    /// Names of the interfaces the type implements.
    pub interfaces: Vec<String>,
}

impl TypeDescriptor {
    /// Start a descriptor for a concrete type with no capabilities and no
    /// interfaces. Chain [`Self::with_capability`] / [`Self::with_interface`]
    /// to fill it in.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            capabilities: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Declare a lifecycle capability.
    pub fn with_capability(mut self, lifetime: Lifetime) -> Self {
        self.capabilities.push(lifetime);
        self
    }

    /// Declare an implemented interface.
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Mark the type as abstract.
    pub fn marked_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Check structural validity.
    ///
    /// A descriptor with an empty name (or an empty interface name) cannot
    /// have come from the generator and is rejected before classification.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidDescriptor {
                name: self.name.clone(),
                reason: "type name is empty".into(),
            });
        }
        if let Some(empty) = self.interfaces.iter().find(|i| i.trim().is_empty()) {
            return Err(DomainError::InvalidDescriptor {
                name: self.name.clone(),
                reason: format!("empty interface name ({empty:?})"),
            });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
