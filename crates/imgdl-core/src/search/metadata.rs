//! Parse the JSON blob carried in a result element's metadata attribute.

use serde::Deserialize;

/// The part of a result's metadata we use. Other keys are ignored.
#[derive(Debug, Deserialize)]
struct ResultMetadata {
    /// Full-resolution media URL.
    murl: Option<String>,
}

/// Returns the media URL from a raw metadata attribute value, or `None` when
/// the blob is not valid JSON or has no string `murl`.
pub fn parse_metadata(raw: &str) -> Option<String> {
    match serde_json::from_str::<ResultMetadata>(raw) {
        Ok(meta) => meta.murl.filter(|u| !u.is_empty()),
        Err(e) => {
            tracing::trace!("skipping result metadata: {}", e);
            None
        }
    }
}
