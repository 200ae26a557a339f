use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;

use prompt_hooks_installer::cli::{Cli, Command};
use prompt_hooks_installer::commands::{self, Capabilities};
use prompt_hooks_installer::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.command_or_default();

    if matches!(command, Command::Version) {
        commands::version::run();
        return Ok(());
    }

    logging::init_subscriber(args.verbose, command.log_name());
    let log = Arc::new(Logger::new(command.log_name()));

    let project_root = match &args.global.project {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("reading current directory")?,
    };
    let caps = Capabilities::system();

    match command {
        Command::Install(opts) => {
            let mut choices = commands::install::choice_provider(&opts);
            commands::install::run(
                &args.global,
                &project_root,
                &log,
                choices.as_mut(),
                &caps,
            )
        }
        Command::Status(opts) => {
            commands::status::run(&args.global, &opts, &project_root, &log, &caps)
        }
        Command::Version => Ok(()),
    }
}
