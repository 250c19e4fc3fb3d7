//! URL Utility Functions
//!
//! URL resolution for links and image sources, plus the image-specific
//! normalization used for run-wide deduplication.

use url::Url;

use crate::dom::Document;
use crate::error::{Error, Result};
use crate::patterns::IMAGE_EXTENSION;

/// Base used when neither the caller nor the document supplies one.
pub const FALLBACK_BASE_URL: &str = "http://localhost/";

/// Check if a string is a valid absolute URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Pick the base URL for a run.
///
/// Order: the caller's URL (which must be absolute), an absolute
/// `<base href>` in the document, then [`FALLBACK_BASE_URL`].
pub fn resolve_base_url(configured: Option<&str>, doc: &Document) -> Result<Url> {
    if let Some(configured) = configured.map(str::trim).filter(|s| !s.is_empty()) {
        return match is_absolute_url(configured) {
            (true, Some(url)) => Ok(url),
            _ => Err(Error::InvalidBaseUrl(configured.to_string())),
        };
    }

    let base_href = doc.select("base[href]").attr("href");
    if let Some((true, Some(url))) = base_href.as_deref().map(is_absolute_url) {
        return Ok(url);
    }

    Url::parse(FALLBACK_BASE_URL).map_err(|e| Error::InvalidBaseUrl(e.to_string()))
}

/// Convert a relative or absolute URL to absolute form.
///
/// Fragment-only links (`#ref-1`) are left untouched so in-document
/// references keep pointing at anchors. `data:`, `javascript:`, `mailto:`
/// and `tel:` URLs are preserved unchanged.
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || url_str.starts_with('#') {
        return url_str.to_string();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    // If already absolute, return as-is
    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    // Resolve relative (and protocol-relative) URL against base
    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Dedup key for an image URL: the lower-cased path of its absolute form.
///
/// Query strings, fragments and hosts are ignored, so the same file served
/// with different resize parameters is only emitted once.
///
/// # Examples
/// ```
/// use rs_docblocks::url_utils::normalize_image_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/post/").unwrap();
/// assert_eq!(normalize_image_url("Photo.JPG?w=800", &base), "/post/photo.jpg");
/// assert_eq!(
///     normalize_image_url("https://cdn.example.com/post/photo.jpg", &base),
///     "/post/photo.jpg"
/// );
/// ```
#[must_use]
pub fn normalize_image_url(url_str: &str, base: &Url) -> String {
    let absolute = create_absolute_url(url_str, base);
    match Url::parse(&absolute) {
        Ok(url) => url.path().to_lowercase(),
        Err(_) => absolute
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_lowercase(),
    }
}

/// Check whether a URL looks like an image: a known image extension, or a
/// host from `image_hosts`.
///
/// This is a heuristic; unlisted CDNs serving extension-less URLs are not
/// recognized.
#[must_use]
pub fn is_image_url(url_str: &str, image_hosts: &[String]) -> bool {
    let url_str = url_str.trim();
    if url_str.is_empty() || url_str.starts_with('#') {
        return false;
    }

    if IMAGE_EXTENSION.is_match(url_str) {
        return true;
    }

    let lower = url_str.to_ascii_lowercase();
    image_hosts
        .iter()
        .any(|host| !host.is_empty() && lower.contains(&host.to_ascii_lowercase()))
}

/// Extract filename from a URL, stripping query parameters and fragments.
///
/// # Examples
/// ```
/// use rs_docblocks::url_utils::extract_filename;
///
/// assert_eq!(extract_filename("https://example.com/images/photo.jpg"), "photo.jpg");
/// assert_eq!(extract_filename("https://example.com/images/photo.jpg?v=123"), "photo.jpg");
/// assert_eq!(extract_filename("/path/to/image.png#section"), "image.png");
/// assert_eq!(extract_filename("https://example.com/"), "");
/// ```
#[must_use]
pub fn extract_filename(url: &str) -> String {
    let url = url.trim();

    if url.is_empty() {
        return String::new();
    }

    // Strip query parameters and fragment identifiers
    let without_query = url.split(['?', '#']).next().unwrap_or(url);

    // Get the last path segment
    let filename = without_query.rsplit('/').next().unwrap_or("").trim();

    // Don't return empty-looking filenames
    if filename.is_empty() || filename == "." || filename == ".." {
        return String::new();
    }

    filename.to_string()
}
