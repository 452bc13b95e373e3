//! Service lifetime policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How long a container-managed instance lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// One instance for the lifetime of the process.
    Singleton,
    /// A fresh instance per resolution.
    Transient,
    /// One instance per unit of work.
    Scoped,
}

impl Lifetime {
    /// Tie-break order when a type declares more than one capability.
    ///
    /// Singleton beats Transient beats Scoped. This is a documented
    /// tie-break, not a validated constraint: a multi-capability descriptor
    /// is accepted and resolved deterministically, never rejected.
    pub const PRIORITY: [Lifetime; 3] = [
        Lifetime::Singleton,
        Lifetime::Transient,
        Lifetime::Scoped,
    ];

    /// Resolve the effective lifetime from a set of declared capabilities.
    ///
    /// Returns the first member of [`Self::PRIORITY`] present in
    /// `capabilities`, or `None` when the set declares no lifecycle at all.
    pub fn from_capabilities(capabilities: &[Lifetime]) -> Option<Lifetime> {
        Self::PRIORITY
            .iter()
            .copied()
            .find(|lifetime| capabilities.contains(lifetime))
    }

    /// Stable lowercase name, matching the manifest spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Transient => "transient",
            Self::Scoped => "scoped",
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_capability_set_has_no_lifetime() {
        assert_eq!(Lifetime::from_capabilities(&[]), None);
    }

    #[test]
    fn single_capability_is_returned() {
        assert_eq!(
            Lifetime::from_capabilities(&[Lifetime::Scoped]),
            Some(Lifetime::Scoped)
        );
    }

    #[test]
    fn singleton_beats_transient() {
        assert_eq!(
            Lifetime::from_capabilities(&[Lifetime::Transient, Lifetime::Singleton]),
            Some(Lifetime::Singleton)
        );
    }

    #[test]
    fn transient_beats_scoped() {
        assert_eq!(
            Lifetime::from_capabilities(&[Lifetime::Scoped, Lifetime::Transient]),
            Some(Lifetime::Transient)
        );
    }

    #[test]
    fn declaration_order_is_irrelevant() {
        let a = Lifetime::from_capabilities(&[
            Lifetime::Scoped,
            Lifetime::Singleton,
            Lifetime::Transient,
        ]);
        let b = Lifetime::from_capabilities(&[
            Lifetime::Transient,
            Lifetime::Scoped,
            Lifetime::Singleton,
        ]);
        assert_eq!(a, Some(Lifetime::Singleton));
        assert_eq!(a, b);
    }

    #[test]
    fn display_matches_manifest_spelling() {
        assert_eq!(Lifetime::Singleton.to_string(), "singleton");
        assert_eq!(Lifetime::Transient.to_string(), "transient");
        assert_eq!(Lifetime::Scoped.to_string(), "scoped");
    }
}
