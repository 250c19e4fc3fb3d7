//! Block extraction.
//!
//! # Module Structure
//!
//! - `tags`: Element kinds and the tag/class lists behind them
//! - `context`: Run-scoped state (counters, image dedup set, TOC mapping)
//! - `anchors`: Cross-reference anchor ids and anchor markers
//! - `toc`: Table-of-contents mapping
//! - `filter`: Exclude-selector and visibility gates
//! - `images`: Image candidate resolution and filtering
//! - `fragment`: Cleaned, absolutized HTML fragments
//! - `handlers`: Block constructors for leaf elements
//! - `traversal`: Recursive classification and infobox bracketing
//! - `container`: Root container resolution
//!
//! # Usage
//!
//! ```rust
//! use rs_docblocks::dom;
//! use rs_docblocks::extractor::{traversal, ExtractionContext};
//! use rs_docblocks::probe::StaticProbe;
//! use rs_docblocks::selector::SelectorSet;
//! use rs_docblocks::Options;
//! use url::Url;
//!
//! let doc = dom::parse("<h2>Intro</h2><p>Hello</p>");
//! let options = Options::default();
//! let base = Url::parse("https://example.com/").unwrap();
//! let mut ctx = ExtractionContext::new(&options, base, SelectorSet::default(), &StaticProbe);
//!
//! let mut blocks = Vec::new();
//! for child in dom::element_children(&doc.select("body")) {
//!     traversal::process_element(&child, &mut ctx, &mut blocks);
//! }
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].id(), "1");
//! ```

pub mod anchors;
pub mod container;
pub mod context;
pub mod filter;
pub mod fragment;
pub mod handlers;
pub mod images;
pub mod tags;
pub mod toc;
pub mod traversal;

pub use anchors::get_anchor_id;
pub use context::ExtractionContext;
pub use tags::ElementKind;
pub use toc::{extract_toc_mapping, TocMapping};
