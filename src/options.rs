//! Configuration for content extraction.
//!
//! `SelectorConfig` carries the selectors found by the external selector
//! discovery step. `Options` carries everything else a run needs: the page
//! URL, the separately resolved title and author, and the heuristic
//! thresholds used by the image filters.

use serde::{Deserialize, Serialize};

/// Selectors identifying the article container and the noise to drop.
///
/// Every field is optional. Deserializes from the camelCase JSON produced by
/// the selector discovery step:
///
/// ```rust
/// use rs_docblocks::SelectorConfig;
///
/// let json = r#"{"content": "main .post", "exclude": [".ad", "nav"]}"#;
/// let config: SelectorConfig = serde_json::from_str(json)?;
/// assert_eq!(config.content.as_deref(), Some("main .post"));
/// assert!(config.article_container.is_none());
/// assert_eq!(config.exclude.len(), 2);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorConfig {
    /// Selector for the main content element.
    pub content: Option<String>,

    /// Selector for the article container, tried after `content`.
    pub article_container: Option<String>,

    /// Selectors for elements to drop, together with their subtrees.
    pub exclude: Vec<String>,
}

impl SelectorConfig {
    /// Config with only a content selector.
    #[must_use]
    pub fn with_content(selector: impl Into<String>) -> Self {
        Self {
            content: Some(selector.into()),
            ..Self::default()
        }
    }

    /// Container selectors in the order they are tried, skipping blanks.
    pub(crate) fn container_candidates(&self) -> impl Iterator<Item = &str> {
        [self.content.as_deref(), self.article_container.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Image hosts whose URLs are images even without a file extension.
pub const DEFAULT_IMAGE_HOSTS: &[&str] = &[
    "cloudinary.com",
    "imgix.net",
    "images.unsplash.com",
    "cdn.sanity.io",
    "imagedelivery.net",
    "i0.wp.com",
    "i1.wp.com",
    "i2.wp.com",
    "googleusercontent.com",
    "pbs.twimg.com",
    "i.imgur.com",
    "upload.wikimedia.org",
    "miro.medium.com",
    "substackcdn.com",
    "images.ctfassets.net",
    "cdninstagram.com",
];

/// Configuration options for a single extraction run.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::Options;
///
/// let options = Options {
///     base_url: Some("https://example.com/post/1".to_string()),
///     author: Some("Jane Doe".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.min_image_size, 100);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the page, used to make links and image sources absolute.
    ///
    /// When unset, an absolute `<base href>` in the document is used, and
    /// failing that `http://localhost/`.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Page title resolved by the caller. Headings equal to it are skipped.
    ///
    /// Default: `None`
    pub title: Option<String>,

    /// Author resolved by the caller. Bylines repeating it are skipped.
    ///
    /// Default: `None`
    pub author: Option<String>,

    /// Images whose known dimensions are below this many pixels are dropped.
    ///
    /// Default: `100`
    pub min_image_size: u32,

    /// Headings shorter than this (in chars) that contain the author are
    /// treated as bylines.
    ///
    /// Default: `50`
    pub byline_max_chars: usize,

    /// `data:` URLs shorter than this are lazy-load placeholders.
    ///
    /// Default: `200`
    pub min_data_url_len: usize,

    /// Host substrings whose URLs are treated as images when a link wraps
    /// an `<img>`.
    ///
    /// Default: [`DEFAULT_IMAGE_HOSTS`]
    pub image_hosts: Vec<String>,

    /// Text of the heading injected before the first footnotes section.
    ///
    /// Default: `"Footnotes"`
    pub footnotes_heading: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            title: None,
            author: None,
            min_image_size: 100,
            byline_max_chars: 50,
            min_data_url_len: 200,
            image_hosts: DEFAULT_IMAGE_HOSTS.iter().map(|s| (*s).to_string()).collect(),
            footnotes_heading: "Footnotes".to_string(),
        }
    }
}
