//! Integration tests for the registrar use case.
//!
//! The domain rules have their own unit coverage; these tests pin the
//! application-level contract: which container operations fire, what
//! propagates, and that the whole pass is repeatable.

use std::sync::{Arc, Mutex};

use mockall::mock;
use mockall::predicate::eq;

use wirekit_core::application::{ApplicationError, RegistrarService, ServiceContainer};
use wirekit_core::domain::{Lifetime, RegistrationEntry, SkipReason, TypeDescriptor};
use wirekit_core::error::{WirekitError, WirekitResult};

mock! {
    Container {}

    impl ServiceContainer for Container {
        fn register_singleton(&self, interface: &str, implementation: &str) -> WirekitResult<()>;
        fn register_transient(&self, interface: &str, implementation: &str) -> WirekitResult<()>;
        fn register_scoped(&self, interface: &str, implementation: &str) -> WirekitResult<()>;
    }
}

/// Minimal recording fake, independent of `wirekit-adapters`, for tests
/// that compare the full entry sequence across containers.
#[derive(Clone, Default)]
struct RecordingFake {
    entries: Arc<Mutex<Vec<RegistrationEntry>>>,
}

impl RecordingFake {
    fn record(&self, interface: &str, implementation: &str, lifetime: Lifetime) {
        self.entries.lock().unwrap().push(RegistrationEntry {
            interface: interface.into(),
            implementation: implementation.into(),
            lifetime,
        });
    }

    fn entries(&self) -> Vec<RegistrationEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ServiceContainer for RecordingFake {
    fn register_singleton(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.record(interface, implementation, Lifetime::Singleton);
        Ok(())
    }

    fn register_transient(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.record(interface, implementation, Lifetime::Transient);
        Ok(())
    }

    fn register_scoped(&self, interface: &str, implementation: &str) -> WirekitResult<()> {
        self.record(interface, implementation, Lifetime::Scoped);
        Ok(())
    }
}

fn conforming(name: &str, lifetime: Lifetime) -> TypeDescriptor {
    TypeDescriptor::new(name)
        .with_capability(lifetime)
        .with_interface(format!("I{name}"))
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[test]
fn conforming_singleton_registers_through_singleton_operation() {
    let mut container = MockContainer::new();
    container
        .expect_register_singleton()
        .with(eq("IFoo"), eq("Foo"))
        .times(1)
        .returning(|_, _| Ok(()));

    let registrar = RegistrarService::new(Box::new(container));
    let report = registrar
        .register_all(&[conforming("Foo", Lifetime::Singleton)])
        .unwrap();

    assert_eq!(report.registered_count(), 1);
    assert_eq!(report.skipped_count(), 0);
}

#[test]
fn each_lifetime_uses_its_own_operation() {
    let mut container = MockContainer::new();
    container
        .expect_register_singleton()
        .with(eq("IAlpha"), eq("Alpha"))
        .times(1)
        .returning(|_, _| Ok(()));
    container
        .expect_register_transient()
        .with(eq("IBeta"), eq("Beta"))
        .times(1)
        .returning(|_, _| Ok(()));
    container
        .expect_register_scoped()
        .with(eq("IGamma"), eq("Gamma"))
        .times(1)
        .returning(|_, _| Ok(()));

    let registrar = RegistrarService::new(Box::new(container));
    registrar
        .register_all(&[
            conforming("Alpha", Lifetime::Singleton),
            conforming("Beta", Lifetime::Transient),
            conforming("Gamma", Lifetime::Scoped),
        ])
        .unwrap();
}

#[test]
fn non_conforming_type_triggers_no_container_call() {
    // Bar declares a capability but exposes no IBar; the mock panics on any
    // unexpected call, so the absence of expectations is the assertion.
    let container = MockContainer::new();

    let registrar = RegistrarService::new(Box::new(container));
    let report = registrar
        .register_all(&[TypeDescriptor::new("Bar")
            .with_capability(Lifetime::Transient)
            .with_interface("ISomething")])
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.skipped[0].reason, SkipReason::NoMatchingInterface);
}

#[test]
fn abstract_type_triggers_no_container_call() {
    let container = MockContainer::new();

    let registrar = RegistrarService::new(Box::new(container));
    let report = registrar
        .register_all(&[conforming("ViewModelBase", Lifetime::Singleton).marked_abstract()])
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.skipped[0].reason, SkipReason::Abstract);
}

#[test]
fn empty_descriptor_set_is_a_no_op() {
    let container = MockContainer::new();
    let registrar = RegistrarService::new(Box::new(container));
    let report = registrar.register_all(&[]).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.skipped_count(), 0);
}

// ── Error propagation ─────────────────────────────────────────────────────────

#[test]
fn container_rejection_propagates_unmodified() {
    let mut container = MockContainer::new();
    container.expect_register_singleton().returning(|i, _| {
        Err(ApplicationError::DuplicateRegistration {
            interface: i.into(),
        }
        .into())
    });

    let registrar = RegistrarService::new(Box::new(container));
    let err = registrar
        .register_all(&[conforming("Foo", Lifetime::Singleton)])
        .unwrap_err();

    assert!(matches!(
        err,
        WirekitError::Application(ApplicationError::DuplicateRegistration { ref interface })
            if interface == "IFoo"
    ));
}

#[test]
fn failure_stops_the_pass() {
    // First registration fails; the second type must never reach the
    // container (no expectation for ITwo).
    let mut container = MockContainer::new();
    container
        .expect_register_singleton()
        .with(eq("IOne"), eq("One"))
        .times(1)
        .returning(|i, _| {
            Err(ApplicationError::DuplicateRegistration {
                interface: i.into(),
            }
            .into())
        });

    let registrar = RegistrarService::new(Box::new(container));
    let result = registrar.register_all(&[
        conforming("One", Lifetime::Singleton),
        conforming("Two", Lifetime::Singleton),
    ]);
    assert!(result.is_err());
}

// ── Repeatability ─────────────────────────────────────────────────────────────

#[test]
fn two_independent_containers_receive_identical_entries() {
    let descriptors = vec![
        conforming("Foo", Lifetime::Singleton),
        TypeDescriptor::new("Bar").with_capability(Lifetime::Transient),
        conforming("Baz", Lifetime::Scoped),
        conforming("Ghost", Lifetime::Transient).marked_abstract(),
    ];

    let first = RecordingFake::default();
    let second = RecordingFake::default();

    let report_a = RegistrarService::new(Box::new(first.clone()))
        .register_all(&descriptors)
        .unwrap();
    let report_b = RegistrarService::new(Box::new(second.clone()))
        .register_all(&descriptors)
        .unwrap();

    assert_eq!(first.entries(), second.entries());
    assert_eq!(report_a, report_b);
    assert_eq!(first.entries().len(), 2);
}

#[test]
fn report_separates_violations_from_opt_outs() {
    let descriptors = vec![
        // Opted out: no capability at all.
        TypeDescriptor::new("PlainHelper").with_interface("IPlainHelper"),
        // Violation: capability declared, convention not followed.
        TypeDescriptor::new("Renamed")
            .with_capability(Lifetime::Singleton)
            .with_interface("IRenamedService"),
    ];

    let registrar = RegistrarService::new(Box::new(RecordingFake::default()));
    let report = registrar.register_all(&descriptors).unwrap();

    assert_eq!(report.skipped_count(), 2);
    let violations: Vec<_> = report.convention_violations().collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].type_name, "Renamed");
}

// ── End-to-end example ────────────────────────────────────────────────────────

#[test]
fn foo_registers_bar_does_not() {
    let container = RecordingFake::default();
    let registrar = RegistrarService::new(Box::new(container.clone()));

    let report = registrar
        .register_all(&[
            TypeDescriptor::new("Foo")
                .with_capability(Lifetime::Singleton)
                .with_interface("IFoo"),
            TypeDescriptor::new("Bar").with_capability(Lifetime::Transient),
        ])
        .unwrap();

    let entries = container.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].interface, "IFoo");
    assert_eq!(entries[0].implementation, "Foo");
    assert_eq!(entries[0].lifetime, Lifetime::Singleton);
    assert_eq!(report.skipped_count(), 1);
}
