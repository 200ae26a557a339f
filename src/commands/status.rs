use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::{Capabilities, CommandSetup};
use crate::cli::{GlobalOpts, StatusOpts};
use crate::config::profiles::Profile;
use crate::logging::{Log, Logger};
use crate::resources::{Resource, ResourceState};
use crate::tasks::{
    Context, Task, TaskResult, directories, framework, hooks, integrations, reference, settings,
    slash_commands,
};

/// Run the status command.
///
/// Reports the state of every resource an install of the profile would
/// touch.  Nothing is written; the registrar is only asked for its list.
///
/// # Errors
///
/// Returns an error if setup fails, the profile is unknown, or a state
/// check fails (e.g. a bundle source file is missing).
pub fn run(
    global: &GlobalOpts,
    opts: &StatusOpts,
    project_root: &Path,
    log: &Arc<Logger>,
    caps: &Capabilities,
) -> Result<()> {
    let setup = CommandSetup::init(global, project_root, log)?;
    let profile = match opts.profile.as_deref() {
        Some(value) => value.parse::<Profile>()?,
        None => Profile::Full,
    };
    log.info(&format!("profile: {profile}"));

    let ctx = Context::new(
        Arc::new(setup.config),
        profile,
        Arc::clone(log) as Arc<dyn Log>,
        true,
        Arc::clone(&caps.executor),
        Arc::clone(&caps.downloader),
    );

    let mut checks: Vec<Box<dyn Task>> = vec![
        Box::new(CheckResources {
            name: "Check directories",
            applies: |_| true,
            collect: |ctx| Ok(boxed(directories::resources(ctx))),
        }),
        Box::new(CheckResources {
            name: "Check hook files",
            applies: |_| true,
            collect: |ctx| Ok(boxed(hooks::resources(ctx))),
        }),
        Box::new(CheckResources {
            name: "Check slash commands",
            applies: Profile::installs_commands,
            collect: |ctx| Ok(boxed(slash_commands::resources(ctx)?)),
        }),
        Box::new(CheckResources {
            name: "Check settings",
            applies: |_| true,
            collect: |ctx| Ok(boxed(vec![settings::resource(ctx)])),
        }),
        Box::new(CheckResources {
            name: "Check framework",
            applies: Profile::extended_integration,
            collect: |ctx| Ok(boxed(vec![framework::resource(ctx)])),
        }),
        Box::new(CheckResources {
            name: "Check reference document",
            applies: Profile::extended_integration,
            collect: |ctx| Ok(boxed(vec![reference::resource(ctx)])),
        }),
    ];
    checks.push(Box::new(CheckIntegrations));

    super::run_tasks(&checks, &ctx, log)
}

fn boxed<R: Resource + 'static>(resources: Vec<R>) -> Vec<Box<dyn Resource>> {
    resources
        .into_iter()
        .map(|r| Box::new(r) as Box<dyn Resource>)
        .collect()
}

/// Log the state of each resource; report the task as skipped when any
/// of them would change.
fn report(ctx: &Context, resources: &[Box<dyn Resource>]) -> Result<TaskResult> {
    let mut pending = 0usize;
    for resource in resources {
        let desc = resource.description();
        match resource.current_state()? {
            ResourceState::Correct => ctx.log.info(&format!("ok: {desc}")),
            ResourceState::Missing => {
                pending += 1;
                ctx.log.info(&format!("missing: {desc}"));
            }
            ResourceState::Incorrect { current } => {
                pending += 1;
                ctx.log.info(&format!("outdated: {desc} ({current})"));
            }
            ResourceState::Invalid { reason } => {
                pending += 1;
                ctx.log.warn(&format!("invalid: {desc} ({reason})"));
            }
        }
    }
    if pending == 0 {
        Ok(TaskResult::Ok)
    } else {
        Ok(TaskResult::Skipped(format!(
            "{pending} of {} need changes",
            resources.len()
        )))
    }
}

/// Read-only check over the resources of one install task.
struct CheckResources {
    name: &'static str,
    applies: fn(Profile) -> bool,
    collect: fn(&Context) -> Result<Vec<Box<dyn Resource>>>,
}

impl std::fmt::Debug for CheckResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckResources")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Task for CheckResources {
    fn name(&self) -> &'static str {
        self.name
    }

    fn should_run(&self, ctx: &Context) -> bool {
        (self.applies)(ctx.profile)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        report(ctx, &(self.collect)(ctx)?)
    }
}

/// Registration state of every configured integration.
#[derive(Debug)]
struct CheckIntegrations;

impl Task for CheckIntegrations {
    fn name(&self) -> &'static str {
        "Check integrations"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.profile.extended_integration() && !ctx.installer().integrations.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let registrar = &ctx.installer().registrar.program;
        if !ctx.executor.which(registrar) {
            return Ok(TaskResult::Skipped(format!("{registrar} not found")));
        }
        let resources: Vec<Box<dyn Resource>> = ctx
            .installer()
            .integrations
            .iter()
            .map(|spec| {
                Box::new(integrations::RegisterIntegration::new(spec.clone()).resource(ctx))
                    as Box<dyn Resource>
            })
            .collect();
        report(ctx, &resources)
    }
}
