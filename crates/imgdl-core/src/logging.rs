//! Logging init: structured logs to stderr.
//!
//! Nothing is written to disk; the process keeps no state between runs.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default directives when `RUST_LOG` is unset. Progress and the final summary
/// are printed by the CLI, so only warnings reach the terminal by default.
const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging to stderr.
/// Returns Err if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("imgdl logging initialized");
    Ok(())
}
