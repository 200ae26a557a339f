//! Typed error variants for resource operations.
//!
//! Resource code returns these variants directly; callers convert to
//! [`anyhow::Error`] via `?`.

use thiserror::Error;

/// Errors that arise from resource checks and apply operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A command invoked by a resource failed with a non-zero exit code.
    #[error("command '{program}' failed (exit {exit_code}): {stderr}")]
    ExecutionFailed {
        /// Name of the program that was invoked.
        program: String,
        /// Exit code returned by the process.
        exit_code: i32,
        /// Captured standard error output.
        stderr: String,
    },

    /// A required source file is absent from the bundle.
    #[error("required source file is missing: {path}")]
    SourceMissing {
        /// Path of the missing file.
        path: String,
    },

    /// A directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A resource exists but is in a state the installer will not touch.
    #[error("invalid state for '{resource}': {reason}")]
    InvalidState {
        /// Name or description of the resource.
        resource: String,
        /// Human-readable explanation.
        reason: String,
    },
}
