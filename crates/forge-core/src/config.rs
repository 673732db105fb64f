//! Configuration management for forge tools
//!
//! Configuration file:
//! - <workspace>/forge.json - Layout overrides for this workspace

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up at the workspace root
pub const CONFIG_FILE: &str = "forge.json";

/// Workspace scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Template tree copied for every new app
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Parent directory of generated apps
    #[serde(default = "default_apps_dir")]
    pub apps_dir: PathBuf,

    /// Workspace manifest listing the members
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Literal token replaced by the app name
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("tools/rust_app_template")
}

fn default_apps_dir() -> PathBuf {
    PathBuf::from("apps")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

fn default_placeholder() -> String {
    "rust_app_template".to_string()
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            apps_dir: default_apps_dir(),
            manifest: default_manifest(),
            placeholder: default_placeholder(),
        }
    }
}

impl ForgeConfig {
    /// Load `forge.json` from the workspace root, falling back to defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read forge config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse forge config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            bail!("placeholder must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = ForgeConfig::load(temp.path()).unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.placeholder, "rust_app_template");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), r#"{"apps_dir": "services"}"#).unwrap();

        let config = ForgeConfig::load(temp.path()).unwrap();
        assert_eq!(config.apps_dir, PathBuf::from("services"));
        assert_eq!(config.template_dir, PathBuf::from("tools/rust_app_template"));
        assert_eq!(config.manifest, PathBuf::from("Cargo.toml"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(ForgeConfig::load(temp.path()).is_err());
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.json");
        fs::write(&path, r#"{"placeholder": ""}"#).unwrap();
        assert!(ForgeConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp = tempdir().unwrap();
        assert!(ForgeConfig::load_from(&temp.path().join("nope.json")).is_err());
    }
}
