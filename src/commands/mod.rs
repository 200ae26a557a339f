//! Top-level subcommand orchestration.
pub mod install;
pub mod status;
pub mod version;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::exec::{Executor, SystemExecutor};
use crate::http::{Downloader, HttpDownloader};
use crate::logging::Logger;
use crate::tasks::{self, Context, Task};

/// External capabilities a command runs against.
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Runs the package manager and the registrar.
    pub executor: Arc<dyn Executor>,
    /// Fetches the reference document.
    pub downloader: Arc<dyn Downloader>,
}

impl Capabilities {
    /// Real process execution and HTTP.
    #[must_use]
    pub fn system() -> Self {
        Self {
            executor: Arc::new(SystemExecutor),
            downloader: Arc::new(HttpDownloader),
        }
    }
}

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Loaded configuration.
    pub config: Config,
}

impl CommandSetup {
    /// Locate the bundle, load `installer.toml` and report warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if no bundle can be found or the configuration
    /// file is malformed.
    pub fn init(global: &GlobalOpts, project_root: &Path, log: &Logger) -> Result<Self> {
        log.stage("Resolving directories");
        let bundle_root = config::resolve_bundle_root(global.source.as_deref(), project_root)?;
        log.info(&format!("bundle: {}", bundle_root.display()));
        log.info(&format!("project: {}", project_root.display()));

        let config = Config::load(&bundle_root, project_root)?;
        log.debug(&format!(
            "{} integration(s) configured",
            config.installer.integrations.len()
        ));

        let warnings = config.validate();
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        Ok(Self { config })
    }
}

/// Execute every task in order and print the summary.
///
/// A critical task failure stops the run immediately; other failures are
/// collected and reported once every task has had its turn.
///
/// # Errors
///
/// Returns an error if a critical task failed or any task recorded a failure.
pub fn run_tasks(task_list: &[Box<dyn Task>], ctx: &Context, log: &Logger) -> Result<()> {
    for task in task_list {
        if let Err(e) = tasks::execute(task.as_ref(), ctx) {
            log.print_summary();
            return Err(e.into());
        }
    }

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        anyhow::bail!("{count} task(s) failed");
    }
    Ok(())
}
