//! Naming-convention classification.
//!
//! # Design Rationale
//!
//! Generated types opt into registration by following one convention: a type
//! `Foo` declaring a lifecycle capability is registered under the interface
//! `IFoo`, if it implements one. There is no hand-maintained manifest of
//! service-to-interface mappings; the generator produces conforming types by
//! construction, and anything that does not conform is skipped without error.
//!
//! This module is the single source of truth for that convention. All
//! eligibility checks and lifetime resolution happen here, as pure functions
//! over descriptors — the application layer only dispatches the results into
//! a container. Classification is deterministic: the same descriptor set
//! always produces the same plan, in input order.

use std::fmt;

use serde::Serialize;

use crate::domain::descriptor::TypeDescriptor;
use crate::domain::lifetime::Lifetime;

/// The marker character prefixed to an implementation's simple name to form
/// its conventional interface name.
pub const INTERFACE_MARKER: char = 'I';

/// Compute the conventional interface name for an implementation type.
///
/// `UserStore` → `IUserStore`.
pub fn expected_interface(type_name: &str) -> String {
    let mut interface = String::with_capacity(type_name.len() + 1);
    interface.push(INTERFACE_MARKER);
    interface.push_str(type_name);
    interface
}

// ── Classification results ────────────────────────────────────────────────────

/// One (interface, implementation, lifetime) registration.
///
/// Created once per matching type, handed to the container, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationEntry {
    /// Interface name the service is registered under.
    pub interface: String,
    /// Implementation type name.
    pub implementation: String,
    /// Lifetime policy resolved from the declared capabilities.
    pub lifetime: Lifetime,
}

/// Why a type produced no registration entry.
///
/// A skip is never an error — types are free to opt out of interface-based
/// registration by not following the convention. The reason is carried so
/// that diagnostic surfaces (`wirekit check`) can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The type is abstract.
    Abstract,
    /// The type declares no lifecycle capability.
    NoLifecycle,
    /// A lifecycle capability is declared, but no implemented interface
    /// matches the conventional name.
    NoMatchingInterface,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract type",
            Self::NoLifecycle => "no lifecycle capability",
            Self::NoMatchingInterface => "no conventionally-named interface",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Register this entry.
    Register(RegistrationEntry),
    /// Produce nothing, for the stated reason.
    Skip(SkipReason),
}

/// Classification of one descriptor, tagged with the type it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub type_name: String,
    pub outcome: Outcome,
}

// ── Classification ────────────────────────────────────────────────────────────

/// Classify one descriptor.
///
/// Eligibility rules, in order:
/// 1. Abstract types are skipped outright.
/// 2. A type with no declared lifecycle capability is skipped.
/// 3. The conventional interface name is `INTERFACE_MARKER` + the simple
///    name; if the type implements no interface with exactly that name, it
///    is skipped.
/// 4. Otherwise one entry is produced, with the lifetime resolved by
///    [`Lifetime::from_capabilities`].
pub fn classify(descriptor: &TypeDescriptor) -> Outcome {
    if descriptor.is_abstract {
        return Outcome::Skip(SkipReason::Abstract);
    }

    let Some(lifetime) = Lifetime::from_capabilities(&descriptor.capabilities) else {
        return Outcome::Skip(SkipReason::NoLifecycle);
    };

    let expected = expected_interface(&descriptor.name);
    if !descriptor.interfaces.iter().any(|i| *i == expected) {
        return Outcome::Skip(SkipReason::NoMatchingInterface);
    }

    Outcome::Register(RegistrationEntry {
        interface: expected,
        implementation: descriptor.name.clone(),
        lifetime,
    })
}

/// Classify every descriptor, in input order.
///
/// Pure and deterministic — running `plan` twice over the same slice yields
/// identical output, which is what makes registration repeatable across
/// independent containers.
pub fn plan(descriptors: &[TypeDescriptor]) -> Vec<Classification> {
    descriptors
        .iter()
        .map(|descriptor| Classification {
            type_name: descriptor.name.clone(),
            outcome: classify(descriptor),
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn conforming(name: &str, lifetime: Lifetime) -> TypeDescriptor {
        TypeDescriptor::new(name)
            .with_capability(lifetime)
            .with_interface(expected_interface(name))
    }

    // ── expected_interface ───────────────────────────────────────────────────

    #[test]
    fn interface_name_is_marker_plus_simple_name() {
        assert_eq!(expected_interface("UserStore"), "IUserStore");
        assert_eq!(expected_interface("Foo"), "IFoo");
    }

    // ── classify ─────────────────────────────────────────────────────────────

    #[test]
    fn conforming_type_registers_under_its_interface() {
        let outcome = classify(&conforming("UserStore", Lifetime::Singleton));
        assert_eq!(
            outcome,
            Outcome::Register(RegistrationEntry {
                interface: "IUserStore".into(),
                implementation: "UserStore".into(),
                lifetime: Lifetime::Singleton,
            })
        );
    }

    #[test]
    fn abstract_type_is_skipped_even_when_conforming() {
        let descriptor = conforming("ViewModelBase", Lifetime::Singleton).marked_abstract();
        assert_eq!(classify(&descriptor), Outcome::Skip(SkipReason::Abstract));
    }

    #[test]
    fn type_without_capability_is_skipped() {
        let descriptor = TypeDescriptor::new("UserStore").with_interface("IUserStore");
        assert_eq!(classify(&descriptor), Outcome::Skip(SkipReason::NoLifecycle));
    }

    #[test]
    fn type_without_matching_interface_is_skipped() {
        let descriptor = TypeDescriptor::new("Bar")
            .with_capability(Lifetime::Transient)
            .with_interface("ISomethingElse");
        assert_eq!(
            classify(&descriptor),
            Outcome::Skip(SkipReason::NoMatchingInterface)
        );
    }

    #[test]
    fn interface_match_is_exact_not_prefix() {
        let descriptor = TypeDescriptor::new("Foo")
            .with_capability(Lifetime::Singleton)
            .with_interface("IFooBar");
        assert_eq!(
            classify(&descriptor),
            Outcome::Skip(SkipReason::NoMatchingInterface)
        );
    }

    #[test]
    fn multi_capability_type_takes_priority_lifetime() {
        let descriptor = TypeDescriptor::new("Cache")
            .with_capability(Lifetime::Scoped)
            .with_capability(Lifetime::Singleton)
            .with_interface("ICache");
        match classify(&descriptor) {
            Outcome::Register(entry) => assert_eq!(entry.lifetime, Lifetime::Singleton),
            other => panic!("expected registration, got {other:?}"),
        }
    }

    #[test]
    fn extra_interfaces_do_not_prevent_registration() {
        let descriptor = conforming("Mailer", Lifetime::Transient)
            .with_interface("IDisposable")
            .with_interface("IMailerFactory");
        assert!(matches!(classify(&descriptor), Outcome::Register(_)));
    }

    // ── plan ─────────────────────────────────────────────────────────────────

    #[test]
    fn plan_preserves_input_order() {
        let descriptors = vec![
            conforming("Alpha", Lifetime::Singleton),
            conforming("Beta", Lifetime::Transient),
        ];
        let plan = plan(&descriptors);
        assert_eq!(plan[0].type_name, "Alpha");
        assert_eq!(plan[1].type_name, "Beta");
    }

    #[test]
    fn plan_is_deterministic() {
        let descriptors = vec![
            conforming("Alpha", Lifetime::Singleton),
            TypeDescriptor::new("Beta").with_capability(Lifetime::Transient),
            conforming("Gamma", Lifetime::Scoped).marked_abstract(),
        ];
        assert_eq!(plan(&descriptors), plan(&descriptors));
    }

    #[test]
    fn foo_bar_end_to_end_example() {
        // `Foo` conforms; `Bar` declares a capability but no `IBar`.
        let descriptors = vec![
            TypeDescriptor::new("Foo")
                .with_capability(Lifetime::Singleton)
                .with_interface("IFoo"),
            TypeDescriptor::new("Bar")
                .with_capability(Lifetime::Transient)
                .with_interface("ISomething"),
        ];

        let plan = plan(&descriptors);
        let entries: Vec<_> = plan
            .iter()
            .filter_map(|c| match &c.outcome {
                Outcome::Register(entry) => Some(entry.clone()),
                Outcome::Skip(_) => None,
            })
            .collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].interface, "IFoo");
        assert_eq!(entries[0].implementation, "Foo");
        assert_eq!(entries[0].lifetime, Lifetime::Singleton);
        assert_eq!(
            plan[1].outcome,
            Outcome::Skip(SkipReason::NoMatchingInterface)
        );
    }
}
