//! Domain-specific error types for the installer.
//!
//! Internal modules return typed errors built with [`thiserror`]; command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! InstallError
//! ├── InvalidChoice           menu input outside 1/2/3
//! ├── SourceNotFound          no bundle directory could be located
//! ├── TaskAborted             a critical task failed; the run stops
//! ├── Config(ConfigError)     installer.toml read/parse failures
//! └── Resource(ResourceError)  copy, directory and command failures
//! ```

use thiserror::Error;

pub use crate::resources::error::ResourceError;

/// Top-level error type for an installation run.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The menu input was not one of the accepted values.
    #[error("Invalid choice '{0}': expected 1, 2 or 3")]
    InvalidChoice(String),

    /// No bundle directory containing the hook sources could be found.
    #[error("cannot locate the hook bundle; pass --source <dir> (searched: {searched})")]
    SourceNotFound {
        /// Comma-separated list of the directories that were checked.
        searched: String,
    },

    /// A critical task failed and the run was aborted.
    #[error("{task} failed: {reason}")]
    TaskAborted {
        /// Name of the task that failed.
        task: String,
        /// Rendered cause chain.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resource operation error.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// Errors that arise from loading `installer.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected schema.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidSyntax {
        /// Path to the offending file.
        path: String,
        /// Parser message.
        message: String,
    },
}
