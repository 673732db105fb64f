//! App scaffolding
//!
//! Validates the name, copies the template tree with the placeholder
//! replaced, then registers the new app in the workspace manifest.

use forge_core::{ForgeConfig, WorkspacePaths};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::copier::copy_tree;
use crate::error::{Result, ScaffoldError};
use crate::manifest::Manifest;
use crate::name::AppName;
use crate::placeholder::Placeholder;

/// Outcome of a successful scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub name: AppName,
    /// Absolute location of the new app
    pub target: PathBuf,
    /// Path as listed in the manifest (e.g. `apps/my_app`)
    pub member: String,
    pub files: usize,
    pub substituted: usize,
    /// False when the manifest already listed the app
    pub registered: bool,
}

/// Creates apps inside one workspace
#[derive(Debug, Clone)]
pub struct Scaffolder {
    paths: WorkspacePaths,
    placeholder: String,
}

impl Scaffolder {
    pub fn new(root: &Path, config: &ForgeConfig) -> Result<Self> {
        let paths = WorkspacePaths::new(root, config)
            .map_err(|e| ScaffoldError::Configuration(format!("{:#}", e)))?;

        Ok(Self {
            paths,
            placeholder: config.placeholder.clone(),
        })
    }

    /// Load `forge.json` (or `config_file`) and build a scaffolder for `root`
    pub fn load(root: &Path, config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => ForgeConfig::load_from(path),
            None => ForgeConfig::load(root),
        }
        .map_err(|e| ScaffoldError::Configuration(format!("{:#}", e)))?;

        Self::new(root, &config)
    }

    pub fn paths(&self) -> &WorkspacePaths {
        &self.paths
    }

    /// Scaffold an app from a raw, unvalidated name
    pub fn create(&self, raw_name: Option<&str>) -> Result<ScaffoldReport> {
        let name = AppName::parse(raw_name)?;
        self.create_app(name)
    }

    /// Scaffold an app whose name is already validated
    pub fn create_app(&self, name: AppName) -> Result<ScaffoldReport> {
        let template = &self.paths.template;
        let target = self.paths.target(name.as_str());
        let member = self.paths.member_entry(name.as_str());

        if !template.is_dir() {
            return Err(ScaffoldError::Configuration(format!(
                "Template directory not found: {}\n\
                 Make sure the rust app template exists before creating apps",
                template.display()
            )));
        }

        // Must precede any write so an existing app is never partially overwritten
        if target.exists() {
            return Err(ScaffoldError::Conflict {
                name: name.to_string(),
                path: target,
            });
        }

        let mut manifest = Manifest::load(&self.paths.manifest)?;

        info!(app = %name, target = %target.display(), "creating rust app");

        let placeholder = Placeholder::new(self.placeholder.as_str(), name.as_str());
        let stats = copy_tree(template, &target, |text| placeholder.apply(text).into_owned())?;

        debug!(
            files = stats.files,
            substituted = stats.transformed,
            "template copied"
        );

        let registered = manifest.add_member(&member);
        if registered {
            manifest.save()?;
        } else {
            info!(
                member = %member,
                manifest = %manifest.path().display(),
                "already registered, skipping"
            );
        }

        Ok(ScaffoldReport {
            name,
            target,
            member,
            files: stats.files,
            substituted: stats.transformed,
            registered,
        })
    }
}

/// Validate `raw_name`, then load the workspace config and scaffold.
///
/// The name is checked before any config is read, so a bad name is always
/// reported as such even when `forge.json` is broken.
pub fn run(
    root: &Path,
    config_file: Option<&Path>,
    raw_name: Option<&str>,
) -> Result<ScaffoldReport> {
    let name = AppName::parse(raw_name)?;
    Scaffolder::load(root, config_file)?.create_app(name)
}
