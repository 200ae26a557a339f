use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::config::installer::InstallerConfig;
use crate::config::layout::{Bundle, ProjectLayout};
use crate::config::profiles::Profile;
use crate::exec::Executor;
use crate::http::Downloader;
use crate::logging::Log;

/// Shared context for task execution.
pub struct Context {
    /// Bundle, project layout and installer settings.
    pub config: Arc<Config>,
    /// Profile selected for this run.
    pub profile: Profile,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
    /// Command executor (package manager, registrar).
    pub executor: Arc<dyn Executor>,
    /// Downloader for remote documents.
    pub downloader: Arc<dyn Downloader>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("bundle", &self.config.bundle.root())
            .field("project", &self.config.project.root())
            .field("profile", &self.profile)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("executor", &self.executor)
            .field("downloader", &self.downloader)
            .finish()
    }
}

impl Context {
    /// Creates a new context for task execution.
    #[must_use]
    pub fn new(
        config: Arc<Config>,
        profile: Profile,
        log: Arc<dyn Log>,
        dry_run: bool,
        executor: Arc<dyn Executor>,
        downloader: Arc<dyn Downloader>,
    ) -> Self {
        Self {
            config,
            profile,
            log,
            dry_run,
            executor,
            downloader,
        }
    }

    /// Source tree the installer copies from.
    #[must_use]
    pub fn bundle(&self) -> &Bundle {
        &self.config.bundle
    }

    /// Destination tree inside the project.
    #[must_use]
    pub fn project(&self) -> &ProjectLayout {
        &self.config.project
    }

    /// Project root directory.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        self.config.project.root()
    }

    /// External-step settings.
    #[must_use]
    pub fn installer(&self) -> &InstallerConfig {
        &self.config.installer
    }
}
