//! Command handlers.
//!
//! Each submodule exposes one `execute` function; `main.rs` dispatches to
//! them. Shared argument-resolution helpers live here.

use std::path::PathBuf;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod check;
pub mod completions;
pub mod config;
pub mod list;

/// Resolve the manifest path: explicit argument first, then the configured
/// default. The path must exist — a missing manifest is a `NotFound`, not a
/// parse failure.
pub(crate) fn resolve_manifest(
    argument: Option<PathBuf>,
    app_config: &AppConfig,
) -> CliResult<PathBuf> {
    let path = argument
        .or_else(|| app_config.defaults.manifest.clone())
        .ok_or(CliError::ManifestNotSpecified)?;

    if !path.exists() {
        return Err(CliError::ManifestNotFound { path });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_argument_wins_over_config() {
        let mut config = AppConfig::default();
        config.defaults.manifest = Some(PathBuf::from("/nonexistent/from-config.toml"));

        // Both paths are missing; the error must name the explicit one.
        let err = resolve_manifest(Some(PathBuf::from("/nonexistent/explicit.toml")), &config)
            .unwrap_err();
        match err {
            CliError::ManifestNotFound { path } => {
                assert_eq!(path, PathBuf::from("/nonexistent/explicit.toml"));
            }
            other => panic!("expected ManifestNotFound, got {other:?}"),
        }
    }

    #[test]
    fn no_argument_and_no_config_is_unspecified() {
        let err = resolve_manifest(None, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::ManifestNotSpecified));
    }
}
