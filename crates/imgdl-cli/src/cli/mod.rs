//! CLI for the imgdl image downloader.

mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use imgdl_core::config::ImgdlConfig;
use imgdl_core::fetch::CurlFetcher;
use imgdl_core::pipeline::{self, ProgressEvent};
use imgdl_core::search::{BingSearch, SearchQuery, DEFAULT_LIMIT};
use std::path::PathBuf;

/// Capacity of the progress channel between the pipeline and the printer.
const PROGRESS_CHANNEL_CAPACITY: usize = 16;

/// Search for images and download them.
#[derive(Debug, Parser)]
#[command(name = "imgdl", version)]
#[command(about = "Search for reusable images and download them", long_about = None)]
pub struct Cli {
    /// Search query.
    #[arg(short, long, value_name = "TEXT")]
    pub query: String,

    /// Output directory (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of images to download.
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// TOML file overriding the search provider and request settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => ImgdlConfig::load(path)?,
            None => ImgdlConfig::default(),
        };
        tracing::debug!("using config: {:?}", cfg);

        let query = SearchQuery::new(self.query, self.limit)?;
        let output = match self.output {
            Some(dir) => dir,
            None => std::env::current_dir().context("current directory")?,
        };

        let (progress_tx, progress_rx) =
            tokio::sync::mpsc::channel::<ProgressEvent>(PROGRESS_CHANNEL_CAPACITY);
        let progress_handle = tokio::spawn(progress::print_progress(progress_rx));

        let outcome = tokio::task::spawn_blocking(move || {
            let searcher = BingSearch::new(cfg.search);
            let fetcher = CurlFetcher::new(cfg.fetch);
            pipeline::run(&searcher, &fetcher, &query, &output, Some(&progress_tx))
        })
        .await
        .context("download task failed")?;

        let _ = progress_handle.await;

        let summary = outcome?;
        println!(
            "Downloaded {} of {} images to {}",
            summary.succeeded,
            summary.attempted,
            summary.output_dir.display()
        );
        Ok(())
    }
}
