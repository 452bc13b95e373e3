//! Link-time service discovery.
//!
//! Generated modules declare their services with `inventory::submit!`; the
//! host collects every declaration in the binary at startup and feeds the
//! lot through the registrar. This is the "every type defined in a given
//! compiled module" scan, without a central manifest and without runtime
//! reflection: a declaration that does not compile does not link.
//!
//! ## Usage
//!
//! In a generated module:
//!
//! ```rust,ignore
//! use wirekit_adapters::discovery::ServiceDecl;
//! use wirekit_core::domain::Lifetime;
//!
//! inventory::submit! {
//!     ServiceDecl::new(
//!         "UserStore",
//!         &[Lifetime::Singleton],
//!         &["IUserStore"],
//!     )
//! }
//! ```
//!
//! In the host's startup code:
//!
//! ```rust,ignore
//! let registrar = RegistrarService::new(Box::new(container));
//! let report = discovery::register_declared(&registrar)?;
//! ```

use tracing::info;

use wirekit_core::{
    application::{RegistrarService, ScanReport},
    domain::{Lifetime, TypeDescriptor},
    error::WirekitResult,
};

/// A link-time service declaration.
///
/// Const-constructible so generated code can `inventory::submit!` it.
/// Declarations describe concrete types only — the generator never emits a
/// declaration for an abstract base, so there is no abstract flag here.
pub struct ServiceDecl {
    /// Simple type name, e.g. `UserStore`.
    pub name: &'static str,

    /// Declared lifecycle capabilities.
    pub capabilities: &'static [Lifetime],

    /// Names of the interfaces the type implements.
    pub interfaces: &'static [&'static str],
}

impl ServiceDecl {
    pub const fn new(
        name: &'static str,
        capabilities: &'static [Lifetime],
        interfaces: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            capabilities,
            interfaces,
        }
    }

    fn to_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name.into(),
            is_abstract: false,
            capabilities: self.capabilities.to_vec(),
            interfaces: self.interfaces.iter().map(|i| (*i).into()).collect(),
        }
    }
}

// Collect ServiceDecl instances across all linked crates
inventory::collect!(ServiceDecl);

/// Collect every declaration in the binary as type descriptors.
///
/// Sorted by type name: inventory's iteration order depends on link order,
/// which is not stable across builds, and registration must be.
pub fn declared_descriptors() -> Vec<TypeDescriptor> {
    let mut decls: Vec<&ServiceDecl> = inventory::iter::<ServiceDecl>.into_iter().collect();
    decls.sort_by_key(|d| d.name);
    decls.iter().map(|d| d.to_descriptor()).collect()
}

/// Number of declarations linked into the binary.
///
/// Useful for debugging and testing.
pub fn declared_count() -> usize {
    inventory::iter::<ServiceDecl>.into_iter().count()
}

/// Names of every linked declaration, sorted.
///
/// Useful for debugging and diagnostics.
pub fn declared_names() -> Vec<&'static str> {
    let mut names: Vec<_> = inventory::iter::<ServiceDecl>
        .into_iter()
        .map(|d| d.name)
        .collect();
    names.sort_unstable();
    names
}

/// Run the registrar over every linked declaration.
pub fn register_declared(registrar: &RegistrarService) -> WirekitResult<ScanReport> {
    let descriptors = declared_descriptors();
    info!("Discovered {} service declarations", descriptors.len());
    registrar.register_all(&descriptors)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
