//! # rs-docblocks
//!
//! Structured document extraction: turns a noisy webpage DOM into an ordered
//! sequence of typed content blocks.
//!
//! Headings, paragraphs, images, lists, tables, quotes, code and separators
//! come out in document order, with bracketed infobox regions. Anchor ids
//! survive so in-document links (citations, footnotes, table of contents)
//! still resolve after the blocks are rendered into another format.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_docblocks::{extract, ContentBlock, SelectorConfig};
//!
//! let html = r##"<html><body><article>
//!     <h2 id="s1">Intro</h2>
//!     <p>Hello <a href="#s1">there</a></p>
//! </article></body></html>"##;
//!
//! let result = extract(html, &SelectorConfig::with_content("article"))?;
//! assert_eq!(result.blocks.len(), 2);
//! assert!(matches!(&result.blocks[0], ContentBlock::Heading { id, .. } if id == "s1"));
//! assert!(result.diagnostics.container_found);
//! # Ok::<(), rs_docblocks::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Container Resolution**: Configured selectors, multi-chapter pages, `<body>` fallback
//! - **Anchor Preservation**: Ids from the element, an inline anchor, or the page's TOC
//! - **Image Resolution**: `currentSrc`, linked originals, `srcset`, `<picture>`, lazy-load attributes
//! - **Noise Filtering**: Exclude selectors, hidden elements, placeholders and tracking pixels
//! - **Soft Failure**: Malformed selectors and failing style queries never abort a run

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Soft-fail CSS selector compilation and matching.
pub mod selector;

/// Block extraction (classification, handlers, traversal, container resolution).
pub mod extractor;

/// Render-state queries (visibility, `currentSrc`, natural image size).
pub mod probe;

/// URL utilities for resolution and image normalization.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, SelectorConfig, DEFAULT_IMAGE_HOSTS};
pub use probe::{RenderProbe, StaticProbe, Visibility};
pub use result::{ContainerStrategy, ContentBlock, Diagnostics, ExtractResult, ListItem};

use dom::Document;

/// Extracts content blocks from an HTML document using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `selectors` - Container and exclude selectors for the page
///
/// # Returns
///
/// Always returns a best-effort result; an empty page yields no blocks, not
/// an error.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::{extract, SelectorConfig};
///
/// let result = extract("<p>Only paragraph</p>", &SelectorConfig::default())?;
/// assert_eq!(result.blocks.len(), 1);
/// # Ok::<(), rs_docblocks::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str, selectors: &SelectorConfig) -> Result<ExtractResult> {
    extract_with_options(html, selectors, &Options::default())
}

/// Extracts content blocks from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.base_url` is set but is
/// not an absolute URL.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::{extract_with_options, ContentBlock, Options, SelectorConfig};
///
/// let html = r#"<article><img src="/img/cat.jpg" alt="Cat"></article>"#;
/// let options = Options {
///     base_url: Some("https://example.com/post/".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &SelectorConfig::with_content("article"), &options)?;
/// assert_eq!(
///     result.blocks[0],
///     ContentBlock::Image {
///         src: "https://example.com/img/cat.jpg".to_string(),
///         alt: "Cat".to_string(),
///         id: String::new(),
///     }
/// );
/// # Ok::<(), rs_docblocks::Error>(())
/// ```
pub fn extract_with_options(html: &str, selectors: &SelectorConfig, options: &Options) -> Result<ExtractResult> {
    let document = Document::from(html);
    extract_document(&document, selectors, options)
}

/// Extracts content blocks from an already parsed document.
///
/// The document is only read, never modified.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.base_url` is set but is
/// not an absolute URL.
pub fn extract_document(document: &Document, selectors: &SelectorConfig, options: &Options) -> Result<ExtractResult> {
    extract_with_probe(document, selectors, options, &StaticProbe)
}

/// Extracts content blocks, answering layout questions through `probe`.
///
/// Hosts holding a rendered page implement [`RenderProbe`] to supply
/// computed visibility, the browser-chosen `currentSrc` and decoded image
/// sizes.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.base_url` is set but is
/// not an absolute URL.
pub fn extract_with_probe(
    document: &Document,
    selectors: &SelectorConfig,
    options: &Options,
    probe: &dyn RenderProbe,
) -> Result<ExtractResult> {
    extract::extract_blocks(document, selectors, options, probe)
}
