//! File copy resource.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::error::ResourceError;
use super::helpers::fs::{ensure_parent_dir, remove_existing};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A file copied byte-for-byte from the bundle into the project.
#[derive(Debug, Clone)]
pub struct FileCopyResource {
    /// Source file in the bundle.
    pub source: PathBuf,
    /// Target path in the project.
    pub target: PathBuf,
    /// Whether the target must carry execute permission (Unix only).
    pub executable: bool,
}

impl FileCopyResource {
    /// Create a plain (non-executable) file copy.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target,
            executable: false,
        }
    }

    /// Create a file copy whose target is marked executable.
    #[must_use]
    pub const fn executable(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target,
            executable: true,
        }
    }

    fn require_source(&self) -> Result<()> {
        if self.source.is_file() {
            Ok(())
        } else {
            Err(ResourceError::SourceMissing {
                path: self.source.display().to_string(),
            }
            .into())
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt as _;
    let mode = std::fs::metadata(path)
        .with_context(|| format!("reading metadata: {}", path.display()))?
        .permissions()
        .mode();
    Ok(mode & 0o111 != 0)
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn is_executable(_: &Path) -> Result<bool> {
    Ok(true)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt as _;
    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("reading metadata: {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("setting permissions: {}", path.display()))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn mark_executable(_: &Path) -> Result<()> {
    Ok(())
}

impl Applicable for FileCopyResource {
    fn description(&self) -> String {
        self.target.file_name().map_or_else(
            || self.target.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.require_source()?;
        ensure_parent_dir(&self.target)?;
        remove_existing(&self.target)?;

        std::fs::copy(&self.source, &self.target).with_context(|| {
            format!(
                "copy {} to {}",
                self.source.display(),
                self.target.display()
            )
        })?;

        if self.executable {
            mark_executable(&self.target)?;
        }

        Ok(ResourceChange::Applied)
    }
}

impl Resource for FileCopyResource {
    fn current_state(&self) -> Result<ResourceState> {
        self.require_source()?;

        if !self.target.exists() && self.target.symlink_metadata().is_ok() {
            return Ok(ResourceState::Incorrect {
                current: "broken symlink".to_string(),
            });
        }

        if !self.target.exists() {
            return Ok(ResourceState::Missing);
        }

        if !self.target.is_file() {
            return Ok(ResourceState::Invalid {
                reason: "target exists and is not a file".to_string(),
            });
        }

        let src_content = std::fs::read(&self.source)
            .with_context(|| format!("read source: {}", self.source.display()))?;
        let dst_content = std::fs::read(&self.target)
            .with_context(|| format!("read target: {}", self.target.display()))?;

        if src_content != dst_content {
            return Ok(ResourceState::Incorrect {
                current: "content differs".to_string(),
            });
        }

        if self.executable && !is_executable(&self.target)? {
            return Ok(ResourceState::Incorrect {
                current: "not executable".to_string(),
            });
        }

        Ok(ResourceState::Correct)
    }
}
