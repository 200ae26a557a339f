//! Named, ordered tasks that orchestrate resource changes.
mod context;
pub mod directories;
pub mod framework;
pub mod hooks;
pub mod integrations;
mod processing;
pub mod reference;
pub mod settings;
pub mod slash_commands;

pub use context::Context;
pub use processing::{ProcessOpts, TaskResult, TaskStats, process_resources};

use anyhow::Result;

use crate::config::installer::InstallerConfig;
use crate::error::InstallError;
use crate::logging::TaskStatus;

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task applies to the selected profile.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Whether a failure of this task aborts the run.
    ///
    /// Non-critical failures are recorded and later tasks still run.
    fn critical(&self) -> bool {
        false
    }

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a file operation or external command fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The complete, ordered set of tasks run by the install command.
///
/// Profile gating happens in each task's [`Task::should_run`], so the list
/// is the same for every profile.
#[must_use]
pub fn all_install_tasks(installer: &InstallerConfig) -> Vec<Box<dyn Task>> {
    let mut tasks: Vec<Box<dyn Task>> = vec![
        Box::new(directories::CreateDirectories),
        Box::new(hooks::InstallHookFiles),
        Box::new(slash_commands::InstallSlashCommands),
        Box::new(settings::InstallSettings),
        Box::new(framework::InstallFramework),
        Box::new(reference::DownloadReference),
    ];
    tasks.extend(
        installer
            .integrations
            .iter()
            .cloned()
            .map(|spec| Box::new(integrations::RegisterIntegration::new(spec)) as Box<dyn Task>),
    );
    tasks
}

/// Execute a task, recording the result in the logger.
///
/// # Errors
///
/// Returns [`InstallError::TaskAborted`] when a critical task fails.
/// Failures of other tasks are only recorded.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<(), InstallError> {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return Ok(());
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            let reason = format!("{e:#}");
            ctx.log.error(&format!("{}: {reason}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&reason));
            if task.critical() {
                return Err(InstallError::TaskAborted {
                    task: task.name().to_string(),
                    reason,
                });
            }
        }
    }
    Ok(())
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::profiles::Profile;
    use crate::resources::test_helpers::FakeExecutor;
    use std::sync::Arc;
    use test_helpers::{context_with, fixture, no_downloads};

    /// A scripted task for testing `execute()`.
    struct ScriptedTask {
        should_run: bool,
        critical: bool,
        result: Result<TaskResult, String>,
    }

    impl Task for ScriptedTask {
        fn name(&self) -> &'static str {
            "scripted"
        }
        fn should_run(&self, _ctx: &Context) -> bool {
            self.should_run
        }
        fn critical(&self) -> bool {
            self.critical
        }
        fn run(&self, _ctx: &Context) -> Result<TaskResult> {
            self.result.clone().map_err(|s| anyhow::anyhow!("{s}"))
        }
    }

    fn run_scripted(task: &ScriptedTask) -> (Result<(), InstallError>, Vec<TaskStatus>) {
        let fx = fixture();
        let (ctx, log) = context_with(
            &fx,
            Profile::Standard,
            Arc::new(FakeExecutor::new()),
            no_downloads(),
        );
        let result = execute(task, &ctx);
        let statuses = log.task_entries().iter().map(|t| t.status).collect();
        (result, statuses)
    }

    #[test]
    fn non_applicable_task_is_recorded() {
        let (result, statuses) = run_scripted(&ScriptedTask {
            should_run: false,
            critical: true,
            result: Err("never runs".to_string()),
        });
        assert!(result.is_ok());
        assert_eq!(statuses, [TaskStatus::NotApplicable]);
    }

    #[test]
    fn skipped_and_dry_run_are_recorded() {
        let (_, statuses) = run_scripted(&ScriptedTask {
            should_run: true,
            critical: false,
            result: Ok(TaskResult::Skipped("already present".to_string())),
        });
        assert_eq!(statuses, [TaskStatus::Skipped]);
        let (_, statuses) = run_scripted(&ScriptedTask {
            should_run: true,
            critical: false,
            result: Ok(TaskResult::DryRun),
        });
        assert_eq!(statuses, [TaskStatus::DryRun]);
    }

    #[test]
    fn best_effort_failure_is_recorded_not_returned() {
        let (result, statuses) = run_scripted(&ScriptedTask {
            should_run: true,
            critical: false,
            result: Err("kaboom".to_string()),
        });
        assert!(result.is_ok());
        assert_eq!(statuses, [TaskStatus::Failed]);
    }

    #[test]
    fn critical_failure_aborts() {
        let (result, statuses) = run_scripted(&ScriptedTask {
            should_run: true,
            critical: true,
            result: Err("kaboom".to_string()),
        });
        assert!(matches!(
            result,
            Err(InstallError::TaskAborted { ref reason, .. }) if reason == "kaboom"
        ));
        assert_eq!(statuses, [TaskStatus::Failed]);
    }

    #[test]
    fn install_tasks_end_with_one_registration_per_integration() {
        let installer = InstallerConfig::default();
        let tasks = all_install_tasks(&installer);
        assert_eq!(tasks.len(), 6 + installer.integrations.len());
        assert_eq!(tasks[6].name(), "Register context7");
        assert_eq!(tasks[7].name(), "Register deepwiki");
    }

    #[test]
    fn critical_tasks_are_the_required_file_steps() {
        let critical: Vec<_> = all_install_tasks(&InstallerConfig::default())
            .iter()
            .filter(|t| t.critical())
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(
            critical,
            ["Create directories", "Install hook files", "Install settings"]
        );
    }
}
