//! Prompt hooks installer.
//!
//! Copies the `UserPromptSubmit` hook scripts and a settings file into a
//! project's `.claude/` directory.  The user picks one of three profiles;
//! the full profile also installs an agent framework, downloads a reference
//! document and registers two integrations with the `claude` CLI.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: bundle and project layout, profiles, `installer.toml`
//! - **[`resources`]**: idempotent `check + apply` primitives (directories, file copies, …)
//! - **[`tasks`]**: named, ordered units of work wired to resources
//! - **[`commands`]**: top-level subcommand orchestration (`install`, `status`)
//!
//! External effects go through the [`exec::Executor`] and
//! [`http::Downloader`] traits and profile selection through
//! [`prompt::ChoiceProvider`], so every layer can be driven in tests.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod http;
pub mod logging;
pub mod prompt;
pub mod resources;
pub mod tasks;
