//! Candidate URL validation.

/// Path suffixes accepted as raster images (compared case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// True if `raw` is an absolute http(s) URL whose path, query excluded,
/// ends in an image extension.
pub fn is_image_url(raw: &str) -> bool {
    let parsed = match url::Url::parse(raw) {
        Ok(u) => u,
        Err(_) => return false,
    };
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return false;
    }
    let path = parsed.path().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
