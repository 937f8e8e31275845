//! Image download: one URL in, one file on disk out.
//!
//! Failures are contained per item and reported as [`DownloadOutcome::Failure`]
//! so the caller can keep going and count them.

mod extension;

pub use extension::{extension_from_url, extension_of, DEFAULT_EXTENSION};

use crate::config::FetchConfig;
use crate::http::{self, GetOptions, HttpError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid image URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub enum DownloadOutcome {
    Success,
    Failure(FetchError),
}

/// Result of one download attempt.
#[derive(Debug)]
pub struct DownloadResult {
    pub source_url: String,
    /// Where the image was (or would have been) written.
    pub destination_path: PathBuf,
    pub outcome: DownloadOutcome,
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DownloadOutcome::Success)
    }
}

/// Destination for `url`: `directory/base_name.<ext>`.
pub fn destination_path(url: &str, directory: &Path, base_name: &str) -> PathBuf {
    directory.join(format!("{}.{}", base_name, extension_from_url(url)))
}

/// Persists one image. Implementations never fail; errors end up in the outcome.
pub trait ImageFetch {
    fn download(&self, url: &str, directory: &Path, base_name: &str) -> DownloadResult;
}

/// Downloads images with libcurl and writes them with `std::fs`.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    config: FetchConfig,
}

impl CurlFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Fetches `url` and writes it to `destination`, creating the parent
    /// directory first. An existing file is overwritten.
    ///
    /// The URL is requested in its normalized form (spaces and other
    /// characters curl rejects are percent-encoded).
    pub fn try_download(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let opts = GetOptions {
            headers: vec![("User-Agent", self.config.user_agent.as_str())],
            accept_compressed: false,
        };
        let response = http::get(parsed.as_str(), &opts)?;

        if let Some(dir) = destination.parent() {
            fs::create_dir_all(dir).map_err(|source| FetchError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(destination, &response.body).map_err(|source| FetchError::Write {
            path: destination.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "saved {} ({} bytes) to {}",
            url,
            response.body.len(),
            destination.display()
        );
        Ok(())
    }
}

impl ImageFetch for CurlFetcher {
    fn download(&self, url: &str, directory: &Path, base_name: &str) -> DownloadResult {
        let destination_path = destination_path(url, directory, base_name);
        let outcome = match self.try_download(url, &destination_path) {
            Ok(()) => DownloadOutcome::Success,
            Err(e) => {
                tracing::warn!("download failed: {}", e);
                DownloadOutcome::Failure(e)
            }
        };
        DownloadResult {
            source_url: url.to_string(),
            destination_path,
            outcome,
        }
    }
}
