//! HTTP download capability.
use anyhow::{Context as _, Result};

/// Abstraction over fetching a single remote document.
#[cfg_attr(test, mockall::automock)]
pub trait Downloader: Send + Sync + std::fmt::Debug {
    /// Fetch `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking [`Downloader`] backed by `ureq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpDownloader;

impl Downloader for HttpDownloader {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let mut response = ureq::get(url)
            .call()
            .with_context(|| format!("GET {url}"))?;
        response
            .body_mut()
            .read_to_vec()
            .with_context(|| format!("reading response body from {url}"))
    }
}
