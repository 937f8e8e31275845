//! Search input and output types.

use thiserror::Error;

/// Number of candidates requested when the user gives no limit.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("search query must not be empty")]
    EmptyText,
    #[error("limit must be a positive integer")]
    ZeroLimit,
}

/// Validated, immutable search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    limit: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, limit: usize) -> Result<Self, QueryError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QueryError::EmptyText);
        }
        if limit == 0 {
            return Err(QueryError::ZeroLimit);
        }
        Ok(Self { text, limit })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Ordered, duplicate-free list of validated image URLs, at most `limit` long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCandidateList {
    urls: Vec<String>,
}

impl ImageCandidateList {
    pub(crate) fn from_validated(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.urls.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }
}

impl IntoIterator for ImageCandidateList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.into_iter()
    }
}

impl<'a> IntoIterator for &'a ImageCandidateList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}
