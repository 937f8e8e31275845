//! Provider and request settings.
//!
//! Every field has a built-in default; a TOML file is only read when the user
//! passes one explicitly, and nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0";

const IMAGE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Search provider settings (`[search]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Image-search endpoint; query parameters are appended to it.
    pub endpoint: String,
    /// Usage-rights filter token sent as `qft`.
    pub license_filter: String,
    /// Form identifier sent as `FORM`.
    pub form_id: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.bing.com/images/search".to_string(),
            license_filter: "+filterui:license-L2_L3_L4".to_string(),
            form_id: "IRFLTR".to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
        }
    }
}

/// Image download settings (`[fetch]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: IMAGE_USER_AGENT.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgdlConfig {
    pub search: SearchConfig,
    pub fetch: FetchConfig,
}

impl ImgdlConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: ImgdlConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }
}
