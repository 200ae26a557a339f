use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::{Capabilities, CommandSetup};
use crate::cli::{GlobalOpts, InstallOpts};
use crate::logging::{Log, Logger};
use crate::prompt::{ChoiceProvider, FixedChoice, InteractivePrompt};
use crate::tasks::{self, Context};

/// The choice provider for `opts`: the `--profile` value if given,
/// otherwise the interactive menu on stdin.
#[must_use]
pub fn choice_provider(opts: &InstallOpts) -> Box<dyn ChoiceProvider> {
    match &opts.profile {
        Some(profile) => Box::new(FixedChoice(profile.clone())),
        None => Box::new(InteractivePrompt::stdio()),
    }
}

/// Run the install command.
///
/// Resolves the bundle and project, asks for a profile, then runs the
/// install tasks.  Nothing is written before a valid profile is chosen.
///
/// # Errors
///
/// Returns an error if the bundle cannot be found, the choice is invalid,
/// a critical task fails, or any best-effort task fails.
pub fn run(
    global: &GlobalOpts,
    project_root: &Path,
    log: &Arc<Logger>,
    choices: &mut dyn ChoiceProvider,
    caps: &Capabilities,
) -> Result<()> {
    log.info(&format!("prompt-hooks {}", super::version::version()));

    let setup = CommandSetup::init(global, project_root, log)?;

    log.stage("Selecting profile");
    let profile = choices.choose()?;
    log.info(&format!("profile: {profile}"));

    let ctx = Context::new(
        Arc::new(setup.config),
        profile,
        Arc::clone(log) as Arc<dyn Log>,
        global.dry_run,
        Arc::clone(&caps.executor),
        Arc::clone(&caps.downloader),
    );

    let all_tasks = tasks::all_install_tasks(ctx.installer());
    super::run_tasks(&all_tasks, &ctx, log)
}
