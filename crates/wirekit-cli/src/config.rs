//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location)
//! 3. Built-in defaults (always present)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for command arguments.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Manifest used when `check`/`list` omit the positional argument.
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to use the default location).  A missing file
    /// is not an error — defaults apply; an unreadable or invalid file is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        let config = toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration to `config_file` (or the default location).
    pub fn save(&self, config_file: Option<&PathBuf>) -> anyhow::Result<()> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(&path, text)
            .map_err(|e| anyhow::anyhow!("cannot write {}: {e}", path.display()))?;
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wirekit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "wirekit", "wirekit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wirekit.toml"))
    }

    /// Read a dotted key, e.g. `defaults.manifest`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.manifest" => Some(
                self.defaults
                    .manifest
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Set a dotted key.  Returns `false` for unknown keys or unparseable
    /// values.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            "defaults.manifest" => {
                self.defaults.manifest = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                true
            }
            "output.no_color" => match value.parse() {
                Ok(flag) => {
                    self.output.no_color = flag;
                    true
                }
                Err(_) => false,
            },
            "output.format" => {
                self.output.format = value.into();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_manifest() {
        assert!(AppConfig::default().defaults.manifest.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let missing = PathBuf::from("/nonexistent/wirekit/config.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set("defaults.manifest", "./services.toml"));
        assert_eq!(
            cfg.get("defaults.manifest").unwrap(),
            "./services.toml"
        );
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = AppConfig::default();
        assert!(!cfg.set("defaults.language", "rust"));
    }

    #[test]
    fn set_rejects_non_boolean_no_color() {
        let mut cfg = AppConfig::default();
        assert!(!cfg.set("output.no_color", "sometimes"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("wirekit-config-test");
        let path = dir.join("config.toml");
        let _ = std::fs::remove_file(&path);

        let mut cfg = AppConfig::default();
        cfg.set("defaults.manifest", "generated/services.toml");
        cfg.save(Some(&path)).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            loaded.defaults.manifest.unwrap(),
            PathBuf::from("generated/services.toml")
        );

        let _ = std::fs::remove_file(&path);
    }
}
