use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::framework::FrameworkResource;
use crate::resources::{Resource as _, ResourceState};

/// The framework install described by `installer.toml`.
#[must_use]
pub fn resource(ctx: &Context) -> FrameworkResource {
    let framework = &ctx.installer().framework;
    FrameworkResource::new(
        framework.program.clone(),
        framework.args.clone(),
        ctx.project_root().to_path_buf(),
        ctx.project().resolve(&framework.directory),
        std::sync::Arc::clone(&ctx.executor),
    )
}

/// Install the agent framework with its package manager.
#[derive(Debug)]
pub struct InstallFramework;

impl Task for InstallFramework {
    fn name(&self) -> &'static str {
        "Install framework"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.profile.extended_integration()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = resource(ctx);
        if resource.current_state()? == ResourceState::Correct {
            ctx.log.info(&format!(
                "{} already present",
                resource.directory.display()
            ));
            return Ok(TaskResult::Skipped("already present".to_string()));
        }

        if !ctx.executor.which(&resource.program) {
            ctx.log.warn(&format!(
                "{} not found; install the framework manually:",
                resource.program
            ));
            ctx.log.info(&format!("  {}", resource.command_line()));
            return Ok(TaskResult::Skipped(format!(
                "{} not found",
                resource.program
            )));
        }

        Ok(
            process_resources(ctx, [resource], &ProcessOpts::install_missing("install"))?
                .finish(ctx),
        )
    }
}
