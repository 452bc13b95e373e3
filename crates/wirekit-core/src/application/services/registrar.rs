//! Registrar Service - startup registration orchestrator.
//!
//! This service runs the one-shot registration pass:
//! 1. Plan: classify every descriptor (pure domain logic)
//! 2. Dispatch: feed each entry to the container, keyed by lifetime
//! 3. Report: return what was registered and what was skipped
//!
//! It runs exactly once per startup. There is no retry and no partial
//! success: the first container rejection propagates and the caller is
//! expected to fail startup.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::ServiceContainer,
    domain::{Outcome, RegistrationEntry, SkipReason, TypeDescriptor, plan},
    error::WirekitResult,
};

/// A type that produced no registration, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedType {
    pub type_name: String,
    pub reason: SkipReason,
}

/// Summary of one registration pass.
///
/// The container side effects are the real output; the report exists for
/// diagnostics (`wirekit check`) and logging. Skips are informational, by
/// design — a report with skips is not a failed report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Entries handed to the container, in registration order.
    pub entries: Vec<RegistrationEntry>,
    /// Types that produced no entry.
    pub skipped: Vec<SkippedType>,
}

impl ScanReport {
    pub fn registered_count(&self) -> usize {
        self.entries.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// `true` when the pass produced no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skips caused by a declared capability with no matching interface —
    /// the one silent-skip case worth surfacing to a human.
    pub fn convention_violations(&self) -> impl Iterator<Item = &SkippedType> {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::NoMatchingInterface)
    }
}

/// Startup registrar.
///
/// Owns the container port for the duration of the registration pass; the
/// populated container is handed back via [`Self::into_container`] and
/// threaded to consumers from there. There is no global container.
pub struct RegistrarService {
    container: Box<dyn ServiceContainer>,
}

impl RegistrarService {
    /// Create a registrar around the container to populate.
    pub fn new(container: Box<dyn ServiceContainer>) -> Self {
        Self { container }
    }

    /// Register every eligible descriptor into the container.
    ///
    /// Eligibility and lifetime resolution follow
    /// [`crate::domain::classify`]; non-conforming types are skipped without
    /// error. Container rejections (e.g. a duplicate interface) propagate
    /// unmodified.
    #[instrument(skip_all, fields(types = descriptors.len()))]
    pub fn register_all(&self, descriptors: &[TypeDescriptor]) -> WirekitResult<ScanReport> {
        let mut report = ScanReport::default();

        for classification in plan(descriptors) {
            match classification.outcome {
                Outcome::Register(entry) => {
                    self.container.register(&entry)?;
                    info!("Registered {}", entry.implementation);
                    report.entries.push(entry);
                }
                Outcome::Skip(reason) => {
                    debug!(
                        type_name = %classification.type_name,
                        reason = %reason,
                        "Skipped"
                    );
                    report.skipped.push(SkippedType {
                        type_name: classification.type_name,
                        reason,
                    });
                }
            }
        }

        info!(
            registered = report.registered_count(),
            skipped = report.skipped_count(),
            "Registration pass complete"
        );
        Ok(report)
    }

    /// Borrow the container (e.g. to inspect it mid-test).
    pub fn container(&self) -> &dyn ServiceContainer {
        self.container.as_ref()
    }

    /// Hand the populated container back to the caller.
    pub fn into_container(self) -> Box<dyn ServiceContainer> {
        self.container
    }
}
