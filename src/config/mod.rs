//! Installer configuration: bundle layout, profiles and `installer.toml`.
pub mod installer;
pub mod layout;
pub mod profiles;
pub mod toml_loader;
pub mod validation;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::error::InstallError;
use layout::{Bundle, ProjectLayout};

/// Everything an installation run reads before touching the project.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source tree the installer copies from.
    pub bundle: Bundle,
    /// Destination tree inside the project.
    pub project: ProjectLayout,
    /// External-step settings from `installer.toml` (or defaults).
    pub installer: installer::InstallerConfig,
}

impl Config {
    /// Load configuration for the given bundle and project roots.
    ///
    /// # Errors
    ///
    /// Returns an error if `installer.toml` exists but cannot be read or parsed.
    pub fn load(bundle_root: &Path, project_root: &Path) -> Result<Self> {
        let bundle = Bundle::new(bundle_root.to_path_buf());
        let installer = toml_loader::load_config(&bundle.config_file())
            .with_context(|| format!("loading {}", layout::CONFIG_FILE))?;
        Ok(Self {
            bundle,
            project: ProjectLayout::new(project_root.to_path_buf()),
            installer,
        })
    }

    /// Collect every configuration warning.
    #[must_use]
    pub fn validate(&self) -> Vec<validation::ValidationWarning> {
        let mut warnings = validation::validate_installer(&self.installer);
        warnings.extend(validation::validate_settings(&self.bundle));
        warnings
    }
}

/// Locate the bundle root.
///
/// An explicit `--source` wins.  Otherwise the directories around the
/// running binary are tried (`target/<profile>/` inside a checkout, or a
/// `bin/` next to the bundle), then the project root itself.
///
/// # Errors
///
/// Returns [`InstallError::SourceNotFound`] when no candidate contains the
/// hook directory.
pub fn resolve_bundle_root(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<PathBuf, InstallError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        candidates.push(parent.join("../.."));
        candidates.push(parent.join(".."));
        candidates.push(parent.to_path_buf());
    }
    candidates.push(project_root.to_path_buf());

    find_bundle_root(&candidates).ok_or_else(|| InstallError::SourceNotFound {
        searched: candidates
            .iter()
            .map(|c| c.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn find_bundle_root(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|c| Bundle::is_bundle_root(c))
        .map(|c| dunce::canonicalize(c).unwrap_or_else(|_| c.clone()))
}
