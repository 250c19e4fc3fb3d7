//! Result types for extraction output.
//!
//! A run produces one ordered sequence of [`ContentBlock`]s plus a
//! [`Diagnostics`] record describing how the container was found and how
//! many elements were visited.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Cleaned HTML fragment of the `<li>`. Never empty.
    pub html: String,

    /// Anchor id of the item, or empty.
    pub id: String,
}

/// One classified, ordered unit of extracted content.
///
/// Serializes with an internal `type` tag:
///
/// ```rust
/// use rs_docblocks::ContentBlock;
///
/// let block = ContentBlock::Separator { id: String::new() };
/// let json = serde_json::to_string(&block)?;
/// assert_eq!(json, r#"{"type":"separator","id":""}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    /// `h1`..`h6`. `id` is never empty.
    Heading {
        /// Heading level, 1 through 6.
        level: u8,
        /// HTML fragment.
        text: String,
        /// Anchor id.
        id: String,
    },

    /// Paragraph fragment, possibly prefixed with an anchor marker.
    Paragraph {
        /// HTML fragment.
        text: String,
        /// Anchor id, or empty.
        id: String,
    },

    /// A content image with an absolute source.
    Image {
        /// Absolute image URL.
        src: String,
        /// Alt text, or the figure caption HTML.
        alt: String,
        /// Anchor id, or empty.
        id: String,
    },

    /// Block quotation.
    Quote {
        /// HTML fragment.
        text: String,
        /// Anchor id, or empty.
        id: String,
    },

    /// Ordered or unordered list with at least one item.
    List {
        /// `true` for `<ol>`.
        ordered: bool,
        /// Non-empty items in document order.
        items: Vec<ListItem>,
        /// Anchor id, or empty.
        id: String,
    },

    /// Preformatted code.
    Code {
        /// Language from a `language-xxx` class, or `"text"`.
        language: String,
        /// Plain text content.
        text: String,
        /// Anchor id, or empty.
        id: String,
    },

    /// Table with plain-text headers and HTML cells.
    Table {
        /// Header cell texts.
        headers: Vec<String>,
        /// Body rows of cell fragments.
        rows: Vec<Vec<String>>,
        /// Anchor id, or empty.
        id: String,
    },

    /// Thematic break.
    Separator {
        /// Anchor id, or empty.
        id: String,
    },

    /// Opens a nested infobox region.
    InfoboxStart {
        /// Title text, or empty.
        title: String,
        /// Anchor id, or empty.
        id: String,
    },

    /// Closes the innermost open infobox region.
    InfoboxEnd,
}

impl ContentBlock {
    /// Anchor id of the block (`InfoboxEnd` has none).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Heading { id, .. }
            | Self::Paragraph { id, .. }
            | Self::Image { id, .. }
            | Self::Quote { id, .. }
            | Self::List { id, .. }
            | Self::Code { id, .. }
            | Self::Table { id, .. }
            | Self::Separator { id }
            | Self::InfoboxStart { id, .. } => id,
            Self::InfoboxEnd => "",
        }
    }
}

/// How the root container(s) were chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStrategy {
    /// A configured selector matched exactly one element.
    Selector,
    /// A configured selector matched several elements (multi-chapter page).
    MultipleContainers,
    /// A single container held several `<article>` elements.
    PromotedArticles,
    /// Nothing matched; the document body was scanned.
    #[default]
    BodyFallback,
}

/// Counters and container info for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Whether a configured selector found the container.
    pub container_found: bool,

    /// Selector that produced the container(s), if any.
    pub container_selector: Option<String>,

    /// Strategy that produced the container(s).
    pub strategy: ContainerStrategy,

    /// Number of root containers scanned.
    pub container_count: usize,

    /// Elements that passed the filters and were classified.
    pub elements_processed: usize,

    /// Elements dropped by exclude selectors or hidden by style.
    pub elements_excluded: usize,

    /// Headings emitted.
    pub heading_count: usize,

    /// Configured selectors that failed to parse.
    pub invalid_selectors: Vec<String>,
}

/// Output of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Content blocks in document order.
    pub blocks: Vec<ContentBlock>,

    /// Run diagnostics.
    pub diagnostics: Diagnostics,
}

impl ExtractResult {
    /// Returns `Err(Error::NoContent)` when no blocks were extracted.
    ///
    /// The engine itself never fails on an empty page; this is for callers
    /// that treat an empty result as an error.
    pub fn require_content(self) -> Result<Self> {
        if self.blocks.is_empty() {
            Err(Error::NoContent)
        } else {
            Ok(self)
        }
    }

    /// Iterator over the image blocks' sources.
    pub fn image_sources(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Image { src, .. } => Some(src.as_str()),
            _ => None,
        })
    }
}
