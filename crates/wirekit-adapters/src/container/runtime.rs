//! Runtime container: the production service container.
//!
//! Registration and construction are separate steps, mirroring how the
//! code generator emits them: the registrar *declares* each mapping
//! (interface, implementation, lifetime) through the `ServiceContainer`
//! port, and the generated wiring module then *binds* a factory to each
//! interface. Resolution constructs and caches per the declared lifetime:
//!
//! | Lifetime  | Behaviour                               |
//! |-----------|-----------------------------------------|
//! | singleton | constructed once, cached process-wide   |
//! | transient | constructed on every resolution         |
//! | scoped    | constructed once per [`Scope`] identity |
//!
//! Resolving a declared-but-unbound interface is an error; resolving a
//! scoped interface without a scope is an error.

use std::{
    any::Any,
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;
use uuid::Uuid;

use wirekit_core::{
    application::{ApplicationError, ports::ServiceContainer},
    domain::{Lifetime, RegistrationEntry},
    error::WirekitResult,
};

type SharedInstance = Arc<dyn Any + Send + Sync>;
type Factory = Box<dyn Fn(&RuntimeContainer) -> WirekitResult<SharedInstance> + Send + Sync>;

/// Identity for one logical unit of work.
///
/// Scoped services resolved with equal `Scope` values share an instance;
/// distinct scopes get distinct instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    id: Uuid,
}

impl Scope {
    /// Open a fresh scope.
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the container holds for one interface.
struct ServiceSlot {
    implementation: String,
    lifetime: Lifetime,
    factory: Option<Factory>,
    /// Singleton cache.
    instance: Option<SharedInstance>,
    /// Per-scope cache, keyed by scope identity.
    scoped: HashMap<Uuid, SharedInstance>,
}

impl ServiceSlot {
    fn new(implementation: &str, lifetime: Lifetime) -> Self {
        Self {
            implementation: implementation.into(),
            lifetime,
            factory: None,
            instance: None,
            scoped: HashMap::new(),
        }
    }
}

/// Interface-name-keyed service container.
///
/// Clones share the same slot table (`Arc<RwLock>` interior), so the host
/// keeps a handle while a boxed clone goes into the registrar.
///
/// A factory must not resolve from the container it is being constructed
/// by: construction runs under the slot-table write lock.
#[derive(Clone)]
pub struct RuntimeContainer {
    slots: Arc<RwLock<HashMap<String, ServiceSlot>>>,
}

impl RuntimeContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of declared interfaces.
    pub fn service_count(&self) -> usize {
        self.slots.read().unwrap().len()
    }

    /// Check whether an interface is declared.
    pub fn contains(&self, interface: &str) -> bool {
        self.slots
            .read()
            .map(|slots| slots.contains_key(interface))
            .unwrap_or(false)
    }

    /// Lifetime declared for an interface, if any.
    pub fn lifetime_of(&self, interface: &str) -> Option<Lifetime> {
        self.slots.read().ok()?.get(interface).map(|s| s.lifetime)
    }

    /// Snapshot of the declared catalog as registration entries.
    pub fn catalog(&self) -> WirekitResult<Vec<RegistrationEntry>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| ApplicationError::ContainerLockError)?;
        let mut entries: Vec<_> = slots
            .iter()
            .map(|(interface, slot)| RegistrationEntry {
                interface: interface.clone(),
                implementation: slot.implementation.clone(),
                lifetime: slot.lifetime,
            })
            .collect();
        entries.sort_by(|a, b| a.interface.cmp(&b.interface));
        Ok(entries)
    }

    /// Bind a factory to a declared interface.
    ///
    /// The interface must have been registered first; binding an unknown
    /// interface is an error, so a typo in generated wiring fails at
    /// startup rather than at first resolution.
    pub fn bind<T, F>(&self, interface: &str, factory: F) -> WirekitResult<()>
    where
        T: Send + Sync + 'static,
        F: Fn(&RuntimeContainer) -> WirekitResult<Arc<T>> + Send + Sync + 'static,
    {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| ApplicationError::ContainerLockError)?;

        let slot = slots
            .get_mut(interface)
            .ok_or_else(|| ApplicationError::ServiceNotRegistered {
                interface: interface.into(),
            })?;

        slot.factory = Some(Box::new(move |container| {
            Ok(factory(container)? as SharedInstance)
        }));

        debug!("Bound factory for {interface}");
        Ok(())
    }

    /// Resolve a singleton or transient service.
    ///
    /// Scoped services must go through [`Self::resolve_in`].
    pub fn resolve<T>(&self, interface: &str) -> WirekitResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| ApplicationError::ContainerLockError)?;

        let slot = slots
            .get_mut(interface)
            .ok_or_else(|| ApplicationError::ServiceNotRegistered {
                interface: interface.into(),
            })?;

        match slot.lifetime {
            Lifetime::Singleton => {
                if let Some(instance) = &slot.instance {
                    return downcast::<T>(instance.clone(), interface);
                }
                let instance = construct(slot, self, interface)?;
                slot.instance = Some(instance.clone());
                downcast::<T>(instance, interface)
            }
            Lifetime::Transient => {
                let instance = construct(slot, self, interface)?;
                downcast::<T>(instance, interface)
            }
            Lifetime::Scoped => Err(ApplicationError::ScopeRequired {
                interface: interface.into(),
            }
            .into()),
        }
    }

    /// Resolve within a scope.
    ///
    /// Scoped services are cached per scope identity; singleton and
    /// transient services behave exactly as in [`Self::resolve`].
    pub fn resolve_in<T>(&self, interface: &str, scope: &Scope) -> WirekitResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        {
            let slots = self
                .slots
                .read()
                .map_err(|_| ApplicationError::ContainerLockError)?;
            let slot =
                slots
                    .get(interface)
                    .ok_or_else(|| ApplicationError::ServiceNotRegistered {
                        interface: interface.into(),
                    })?;
            if slot.lifetime != Lifetime::Scoped {
                drop(slots);
                return self.resolve(interface);
            }
        }

        let mut slots = self
            .slots
            .write()
            .map_err(|_| ApplicationError::ContainerLockError)?;
        let slot = slots
            .get_mut(interface)
            .ok_or_else(|| ApplicationError::ServiceNotRegistered {
                interface: interface.into(),
            })?;

        if let Some(instance) = slot.scoped.get(&scope.id) {
            return downcast::<T>(instance.clone(), interface);
        }
        let instance = construct(slot, self, interface)?;
        slot.scoped.insert(scope.id, instance.clone());
        downcast::<T>(instance, interface)
    }

    /// Drop all instances cached for a scope.
    ///
    /// Call when the unit of work ends; declared mappings and factories are
    /// untouched.
    pub fn close_scope(&self, scope: &Scope) -> WirekitResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| ApplicationError::ContainerLockError)?;
        for slot in slots.values_mut() {
            slot.scoped.remove(&scope.id);
        }
        Ok(())
    }

    fn declare(
        &self,
        interface: &str,
        implementation: &str,
        lifetime: Lifetime,
    ) -> WirekitResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| ApplicationError::ContainerLockError)?;

        if slots.contains_key(interface) {
            return Err(ApplicationError::DuplicateRegistration {
                interface: interface.into(),
            }
            .into());
        }

        slots.insert(interface.into(), ServiceSlot::new(implementation, lifetime));
        Ok(())
    }
}

impl Default for RuntimeContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceContainer for RuntimeContainer {
    fn register_singleton(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.declare(interface, implementation, Lifetime::Singleton)
    }

    fn register_transient(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.declare(interface, implementation, Lifetime::Transient)
    }

    fn register_scoped(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.declare(interface, implementation, Lifetime::Scoped)
    }
}

fn construct(
    slot: &ServiceSlot,
    container: &RuntimeContainer,
    interface: &str,
) -> WirekitResult<SharedInstance> {
    let factory = slot
        .factory
        .as_ref()
        .ok_or_else(|| ApplicationError::FactoryNotBound {
            interface: interface.into(),
        })?;
    factory(container)
}

fn downcast<T>(instance: SharedInstance, interface: &str) -> WirekitResult<Arc<T>>
where
    T: Send + Sync + 'static,
{
    instance
        .downcast::<T>()
        .map_err(|_| {
            ApplicationError::TypeMismatch {
                interface: interface.into(),
            }
            .into()
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
