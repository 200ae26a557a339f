use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::file_copy::FileCopyResource;
use crate::resources::helpers::fs::list_files;

/// Slash-command files shipped in the bundle's `commands/` directory.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub fn resources(ctx: &Context) -> Result<Vec<FileCopyResource>> {
    let target_dir = ctx.project().commands_dir();
    Ok(list_files(&ctx.bundle().commands_dir())?
        .into_iter()
        .filter_map(|source| {
            let name = source.file_name()?.to_owned();
            Some(FileCopyResource::new(source, target_dir.join(name)))
        })
        .collect())
}

/// Copy slash commands into `.claude/commands/`.
#[derive(Debug)]
pub struct InstallSlashCommands;

impl Task for InstallSlashCommands {
    fn name(&self) -> &'static str {
        "Install slash commands"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.profile.installs_commands()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = resources(ctx)?;
        if resources.is_empty() {
            return Ok(TaskResult::Skipped(
                "bundle has no slash commands".to_string(),
            ));
        }
        Ok(process_resources(ctx, resources, &ProcessOpts::apply_all("install"))?.finish(ctx))
    }
}
