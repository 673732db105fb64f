//! Standard paths inside a forge workspace

use crate::config::ForgeConfig;
use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};

/// Resolved workspace paths
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Invocation root (the workspace directory)
    pub root: PathBuf,
    /// Template tree (<root>/tools/rust_app_template)
    pub template: PathBuf,
    /// Parent of generated apps (<root>/apps)
    pub apps: PathBuf,
    /// Workspace manifest (<root>/Cargo.toml)
    pub manifest: PathBuf,
    apps_rel: PathBuf,
}

impl WorkspacePaths {
    /// Resolve the layout; `apps_dir` must stay inside `root`
    pub fn new(root: &Path, config: &ForgeConfig) -> Result<Self> {
        let apps_rel = if config.apps_dir.is_absolute() {
            match config.apps_dir.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => bail!(
                    "apps_dir {} is outside the workspace root {}",
                    config.apps_dir.display(),
                    root.display()
                ),
            }
        } else {
            config.apps_dir.clone()
        };

        if let Some(component) = apps_rel
            .components()
            .find(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!(
                "apps_dir {} must be a plain path below the workspace root (found {:?})",
                config.apps_dir.display(),
                component.as_os_str()
            );
        }

        Ok(Self {
            root: root.to_path_buf(),
            template: root.join(&config.template_dir),
            apps: root.join(&config.apps_dir),
            manifest: root.join(&config.manifest),
            apps_rel,
        })
    }

    /// Directory a new app is created in
    pub fn target(&self, app: &str) -> PathBuf {
        self.apps.join(app)
    }

    /// Member path as written in the manifest, always `/`-separated
    pub fn member_entry(&self, app: &str) -> String {
        let mut parts: Vec<String> = self
            .apps_rel
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.push(app.to_string());
        parts.join("/")
    }
}
