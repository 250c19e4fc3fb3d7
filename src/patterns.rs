//! Compiled regex patterns for content extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches a single HTML tag.
pub static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").expect("HTML_TAG regex")
});

// =============================================================================
// Image Filtering Patterns
// =============================================================================

/// Matches file names and paths used by lazy-load placeholders.
pub static PLACEHOLDER_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(placeholder|lazy[-_]?load|blank\.(?:gif|png|jpe?g|svg)|transparent\.(?:gif|png)|loading\.(?:gif|svg|png)|gr[ae]y\.(?:gif|png)|empty\.(?:gif|png)|1x1\.(?:gif|png))",
    )
    .expect("PLACEHOLDER_IMAGE regex")
});

/// Matches file names of spacers and tracking pixels.
pub static TRACKING_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(spacer|pixel|tracking)").expect("TRACKING_IMAGE regex")
});

/// Matches class names of avatar and byline images.
pub static AVATAR_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(avatar|profile|author)").expect("AVATAR_CLASS regex")
});

/// Matches image file extensions at the end of a URL path.
pub static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:jpe?g|png|gif|webp|avif|svg|bmp|tiff?|heic)(?:[?#]|$)")
        .expect("IMAGE_EXTENSION regex")
});

// CDN resize directives. Each captures a width and/or height in pixels.

/// `?w=80`, `&width=80`
pub static CDN_WIDTH_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[?&](?:w|width)=(\d+)").expect("CDN_WIDTH_PARAM regex")
});

/// `?h=80`, `&height=80`
pub static CDN_HEIGHT_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[?&](?:h|height)=(\d+)").expect("CDN_HEIGHT_PARAM regex")
});

/// Cloudinary-style `w_80` path transforms.
pub static CDN_WIDTH_TRANSFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[/,]w_(\d+)").expect("CDN_WIDTH_TRANSFORM regex")
});

/// Cloudinary-style `h_80` path transforms.
pub static CDN_HEIGHT_TRANSFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[/,]h_(\d+)").expect("CDN_HEIGHT_TRANSFORM regex")
});

/// `-150x150.jpg`, `/80x80/`, `?resize=80,80`
pub static CDN_SIZE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[-_/]|resize=)(\d{1,4})(?:x|,|%2C)(\d{1,4})(?:[./_&-]|$)")
        .expect("CDN_SIZE_PAIR regex")
});

/// Gravatar-style square size `?s=80`, `&size=80`
pub static CDN_SQUARE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[?&](?:s|size)=(\d+)(?:&|$)").expect("CDN_SQUARE_PARAM regex")
});

// =============================================================================
// Classification Patterns
// =============================================================================

/// Extracts the language from a `language-xxx` class.
pub static LANGUAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)language-([^\s]+)").expect("LANGUAGE_CLASS regex")
});

/// Matches class names of infobox title elements.
pub static INFOBOX_TITLE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(title|heading|header|summary|caption|label)").expect("INFOBOX_TITLE_CLASS regex")
});

/// Matches inline style declarations that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*(?:display\s*:\s*none|visibility\s*:\s*hidden)\s*(?:!important\s*)?(?:;|$)")
        .expect("HIDDEN_STYLE regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Descendants that carry citation and footnote anchors.
pub const ANCHOR_DESCENDANT_SELECTOR: &str =
    r#"a[id], a[name], span[id], span[name], sup[id], [id^="source"], [id^="ref"], [id^="cite"]"#;

/// In-page links used to detect a table of contents.
pub const TOC_LINK_SELECTOR: &str = r##"a[href^="#"]"##;
