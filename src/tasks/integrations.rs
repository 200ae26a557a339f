use std::sync::Arc;

use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::config::installer::IntegrationSpec;
use crate::resources::integration::IntegrationResource;

/// Register one integration with the registrar CLI.
///
/// When the registrar is not on `PATH` the task prints the equivalent
/// command for the user to run and reports itself as skipped.
#[derive(Debug)]
pub struct RegisterIntegration {
    name: String,
    spec: IntegrationSpec,
}

impl RegisterIntegration {
    /// Create a registration task for `spec`.
    #[must_use]
    pub fn new(spec: IntegrationSpec) -> Self {
        Self {
            name: format!("Register {}", spec.name),
            spec,
        }
    }

    /// The resource this task applies.
    #[must_use]
    pub fn resource(&self, ctx: &Context) -> IntegrationResource {
        IntegrationResource::new(
            self.spec.clone(),
            ctx.installer().registrar.program.clone(),
            Arc::clone(&ctx.executor),
        )
    }
}

impl Task for RegisterIntegration {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.profile.extended_integration()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = self.resource(ctx);
        if !ctx.executor.which(&resource.registrar) {
            ctx.log.warn(&format!(
                "{} not found; register {} manually:",
                resource.registrar, self.spec.name
            ));
            ctx.log.info(&format!("  {}", resource.manual_instructions()));
            return Ok(TaskResult::Skipped(format!(
                "{} not found",
                resource.registrar
            )));
        }

        Ok(
            process_resources(ctx, [resource], &ProcessOpts::install_missing("register"))?
                .finish_or_present(ctx),
        )
    }
}
