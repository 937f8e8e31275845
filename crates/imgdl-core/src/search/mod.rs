//! Image search: one results page in, ordered candidate URLs out.
//!
//! The results page carries one element per hit (class `iusc`) whose `m`
//! attribute holds a JSON blob; its `murl` field is the full-resolution image.
//! [`extract_candidates`] turns a captured page into candidates without any
//! network access; [`BingSearch`] adds the request.

mod metadata;
mod query;
mod validate;

pub use metadata::parse_metadata;
pub use query::{ImageCandidateList, QueryError, SearchQuery, DEFAULT_LIMIT};
pub use validate::is_image_url;

use crate::config::SearchConfig;
use crate::http::{self, GetOptions, HttpError};
use scraper::{Html, Selector};
use std::collections::HashSet;
use thiserror::Error;

/// CSS selector for one image result.
const RESULT_SELECTOR: &str = ".iusc";
/// Attribute holding the JSON metadata blob.
const METADATA_ATTR: &str = "m";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search endpoint {endpoint}: {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("invalid result selector: {0}")]
    Selector(String),
}

/// Source of image candidates for a query.
///
/// Implementations never fail: any internal error yields an empty list, which
/// callers treat as "nothing found".
pub trait ImageSearch {
    fn search(&self, query: &SearchQuery) -> ImageCandidateList;
}

/// Extracts candidates from a results page: metadata URLs in document order,
/// duplicates dropped (first occurrence wins), non-image URLs dropped, then
/// truncated to `limit`.
pub fn extract_candidates(html: &str, limit: usize) -> Result<ImageCandidateList, SearchError> {
    let selector =
        Selector::parse(RESULT_SELECTOR).map_err(|e| SearchError::Selector(format!("{:?}", e)))?;
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut raw_count = 0usize;
    let urls: Vec<String> = document
        .select(&selector)
        .filter_map(|el| el.value().attr(METADATA_ATTR))
        .filter_map(parse_metadata)
        .inspect(|_| raw_count += 1)
        .filter(|u| seen.insert(u.clone()))
        .filter(|u| is_image_url(u))
        .take(limit)
        .collect();

    tracing::debug!(
        raw = raw_count,
        kept = urls.len(),
        limit,
        "extracted image candidates"
    );
    Ok(ImageCandidateList::from_validated(urls))
}

/// Bing image search client.
#[derive(Debug, Clone)]
pub struct BingSearch {
    config: SearchConfig,
}

impl BingSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Builds the request URL: endpoint plus `q`, `qft` and `FORM` parameters.
    pub fn search_url(&self, query: &SearchQuery) -> Result<url::Url, SearchError> {
        url::Url::parse_with_params(
            &self.config.endpoint,
            &[
                ("q", query.text()),
                ("qft", self.config.license_filter.as_str()),
                ("FORM", self.config.form_id.as_str()),
            ],
        )
        .map_err(|source| SearchError::Endpoint {
            endpoint: self.config.endpoint.clone(),
            source,
        })
    }

    /// Fetches the results page and extracts candidates, reporting failures.
    pub fn try_search(&self, query: &SearchQuery) -> Result<ImageCandidateList, SearchError> {
        let url = self.search_url(query)?;
        let opts = GetOptions {
            headers: vec![
                ("Accept", self.config.accept.as_str()),
                ("Accept-Language", self.config.accept_language.as_str()),
                ("User-Agent", self.config.user_agent.as_str()),
                ("Connection", "keep-alive"),
                ("Cache-Control", "no-cache"),
                ("Pragma", "no-cache"),
            ],
            accept_compressed: true,
        };
        tracing::info!(query = query.text(), "searching {}", url);
        let response = http::get(url.as_str(), &opts)?;
        let html = String::from_utf8_lossy(&response.body);
        extract_candidates(&html, query.limit())
    }
}

impl ImageSearch for BingSearch {
    fn search(&self, query: &SearchQuery) -> ImageCandidateList {
        match self.try_search(query) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("error searching for images: {}", e);
                ImageCandidateList::default()
            }
        }
    }
}
