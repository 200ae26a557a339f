//! Command-line surface.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the prompt hooks installer.
#[derive(Parser, Debug)]
#[command(
    name = "prompt-hooks",
    about = "Install UserPromptSubmit hooks and settings into a project's .claude directory",
    version
)]
pub struct Cli {
    /// Subcommand to run (defaults to an interactive `install`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

impl Cli {
    /// The subcommand to run, with `install` filled in when none was given.
    #[must_use]
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Install(InstallOpts::default()))
    }
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Project to install into (defaults to the current directory)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Bundle directory holding hooks/ and settings/ (auto-detected by default)
    #[arg(long, global = true)]
    pub source: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Install hooks, settings and (for the full profile) integrations
    Install(InstallOpts),
    /// Report what an install would change, without changing anything
    Status(StatusOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file (`<name>.log`).
    #[must_use]
    pub const fn log_name(&self) -> &'static str {
        match self {
            Self::Install(_) => "install",
            Self::Status(_) => "status",
            Self::Version => "version",
        }
    }
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct InstallOpts {
    /// Profile to install instead of prompting (1|2|3|standard|enhanced|full)
    #[arg(short, long)]
    pub profile: Option<String>,
}

/// Options for the `status` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct StatusOpts {
    /// Profile to check (defaults to full)
    #[arg(short, long)]
    pub profile: Option<String>,
}
