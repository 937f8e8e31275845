//! File extension from a URL path.

/// Extension used when the URL path carries none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Longest suffix still treated as an extension.
const MAX_EXTENSION_LEN: usize = 8;

/// Derives a lowercase file extension from the last path segment of `url`.
///
/// Takes the text after the last `.` of the final segment, ignoring the query
/// string and fragment. Falls back to [`DEFAULT_EXTENSION`] when the URL does
/// not parse, the segment has no dot, or the suffix is empty, too long, or
/// not ASCII alphanumeric. Content type and magic bytes are not consulted.
pub fn extension_from_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => extension_of(&parsed),
        Err(_) => DEFAULT_EXTENSION.to_string(),
    }
}

/// Like [`extension_from_url`] for an already parsed URL.
pub fn extension_of(parsed: &url::Url) -> String {
    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    match segment.rsplit_once('.') {
        Some((_, ext))
            if !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}
