//! Search, then download every candidate in order.
//!
//! Runs entirely on the calling thread: one search request, then one download
//! per candidate, strictly one after another. Per-item failures are counted,
//! never propagated; only an unusable output directory or an empty search
//! result end the run with an error.

mod progress;

pub use progress::ProgressEvent;

use crate::fetch::ImageFetch;
use crate::search::{ImageSearch, SearchQuery};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc::Sender;

use progress::emit;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot resolve output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No images found")]
    NoImagesFound,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Download attempts made; equals the number of candidates.
    pub attempted: usize,
    pub succeeded: usize,
    /// Absolute output directory.
    pub output_dir: PathBuf,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}

/// Base name for the candidate at 1-based `index`.
pub fn image_base_name(index: usize) -> String {
    format!("image_{}", index)
}

/// Resolves `output` against the current directory without touching the filesystem.
pub fn resolve_output_dir(output: &Path) -> Result<PathBuf, PipelineError> {
    std::path::absolute(output).map_err(|source| PipelineError::OutputDir {
        path: output.to_path_buf(),
        source,
    })
}

/// Runs one search and downloads every candidate into `output`.
///
/// Blocking; call from `spawn_blocking` if used from async code.
pub fn run<S, F>(
    searcher: &S,
    fetcher: &F,
    query: &SearchQuery,
    output: &Path,
    progress: Option<&Sender<ProgressEvent>>,
) -> Result<RunSummary, PipelineError>
where
    S: ImageSearch + ?Sized,
    F: ImageFetch + ?Sized,
{
    let output_dir = resolve_output_dir(output)?;

    emit(
        progress,
        ProgressEvent::Searching {
            query: query.text().to_string(),
        },
    );
    let candidates = searcher.search(query);
    if candidates.is_empty() {
        tracing::info!(query = query.text(), "search returned no candidates");
        return Err(PipelineError::NoImagesFound);
    }

    let total = candidates.len();
    emit(progress, ProgressEvent::Downloading { total });
    tracing::info!(total, dir = %output_dir.display(), "downloading candidates");

    let mut succeeded = 0usize;
    for (i, url) in candidates.iter().enumerate() {
        let index = i + 1;
        let result = fetcher.download(url, &output_dir, &image_base_name(index));
        if result.is_success() {
            succeeded += 1;
        }
        emit(
            progress,
            ProgressEvent::Item {
                index,
                total,
                result,
            },
        );
    }

    tracing::info!(succeeded, total, "run complete");
    Ok(RunSummary {
        attempted: total,
        succeeded,
        output_dir,
    })
}
