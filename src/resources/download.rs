//! Downloaded document resource.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use super::helpers::fs::ensure_parent_dir;
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::http::Downloader;

/// A document fetched over HTTP and stored in the project.
///
/// Any existing file at the destination counts as present; the remote copy
/// is not compared.
#[derive(Debug)]
pub struct DownloadResource {
    /// Source URL.
    pub url: String,
    /// Destination path.
    pub destination: PathBuf,
    downloader: Arc<dyn Downloader>,
}

impl DownloadResource {
    /// Create a new download resource.
    #[must_use]
    pub fn new(url: String, destination: PathBuf, downloader: Arc<dyn Downloader>) -> Self {
        Self {
            url,
            destination,
            downloader,
        }
    }
}

impl Applicable for DownloadResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.url, self.destination.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        let body = self.downloader.fetch(&self.url)?;
        ensure_parent_dir(&self.destination)?;
        std::fs::write(&self.destination, body)
            .with_context(|| format!("writing {}", self.destination.display()))?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for DownloadResource {
    fn current_state(&self) -> Result<ResourceState> {
        if self.destination.is_file() {
            Ok(ResourceState::Correct)
        } else if self.destination.exists() {
            Ok(ResourceState::Invalid {
                reason: "destination exists and is not a file".to_string(),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
