//! Directory resource.
use anyhow::Result;
use std::path::PathBuf;

use super::error::ResourceError;
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A directory that must exist under the project root.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Absolute path of the directory.
    pub path: PathBuf,
}

impl DirectoryResource {
    /// Create a new directory resource.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Applicable for DirectoryResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.path.is_dir() {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        std::fs::create_dir_all(&self.path).map_err(|source| ResourceError::CreateDir {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for DirectoryResource {
    fn current_state(&self) -> Result<ResourceState> {
        if self.path.is_dir() {
            Ok(ResourceState::Correct)
        } else if self.path.symlink_metadata().is_ok() {
            Ok(ResourceState::Invalid {
                reason: "path exists and is not a directory".to_string(),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
