//! Descriptor-manifest loader.
//!
//! Parses the `services.toml` file the code generator emits next to each
//! generated module, converting it into domain [`TypeDescriptor`] values
//! ready for the registrar.
//!
//! # `services.toml` format
//!
//! ```toml
//! # one [[type]] table per generated type
//! [[type]]
//! name       = "UserStore"
//! lifetimes  = ["singleton"]        # singleton | transient | scoped
//! interfaces = ["IUserStore", "IDisposable"]
//!
//! [[type]]
//! name     = "ViewModelBase"
//! abstract = true                   # optional, default false
//!
//! [[type]]
//! name      = "AuditTrail"
//! lifetimes = ["scoped"]
//! # no interfaces: classified, then skipped by convention
//! ```
//!
//! Structural problems (unreadable file, invalid TOML, unknown lifetime
//! spelling, empty names) are load errors. *Semantic* non-conformance is
//! not: a type without the conventional interface loads fine and is skipped
//! later by classification, exactly as if it had come from any other
//! descriptor source.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use wirekit_core::{
    application::ApplicationError,
    domain::{Lifetime, TypeDescriptor},
    error::WirekitResult,
};

// ── Raw (serde) manifest structures ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default, rename = "type")]
    types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawType {
    name: String,

    #[serde(default, rename = "abstract")]
    is_abstract: bool,

    #[serde(default)]
    lifetimes: Vec<Lifetime>,

    #[serde(default)]
    interfaces: Vec<String>,
}

impl RawType {
    fn into_descriptor(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            is_abstract: self.is_abstract,
            capabilities: self.lifetimes,
            interfaces: self.interfaces,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load and validate a descriptor manifest.
pub fn load_manifest(path: &Path) -> WirekitResult<Vec<TypeDescriptor>> {
    let text = fs::read_to_string(path).map_err(|e| ApplicationError::ManifestError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let descriptors = parse(&text).map_err(|reason| ApplicationError::ManifestError {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!(
        path = %path.display(),
        types = descriptors.len(),
        "Manifest loaded"
    );
    Ok(descriptors)
}

/// Parse manifest text; the caller attaches the path on error.
fn parse(text: &str) -> Result<Vec<TypeDescriptor>, String> {
    let raw: RawManifest = toml::from_str(text).map_err(|e| e.to_string())?;

    let descriptors: Vec<TypeDescriptor> = raw
        .types
        .into_iter()
        .map(RawType::into_descriptor)
        .collect();

    for descriptor in &descriptors {
        descriptor.validate().map_err(|e| e.to_string())?;
    }

    Ok(descriptors)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
