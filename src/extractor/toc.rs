//! Table-of-contents mapping.
//!
//! An in-article TOC links to sections by fragment (`<a href="#intro">`).
//! When the target headings carry no id of their own, the TOC is the only
//! place the id survives, so its links are recorded as
//! normalized-text → fragment and consulted when a heading lacks an id.

use std::collections::HashMap;

use dom_query::Selection;

use crate::patterns::{HTML_TAG, TOC_LINK_SELECTOR, WHITESPACE_NORMALIZE};

/// Fewer in-page links than this is an incidental link list, not a TOC.
pub const MIN_TOC_LINKS: usize = 2;

/// Normalized heading text to anchor id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocMapping(HashMap<String, String>);

impl TocMapping {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no TOC has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Anchor id for a heading's text, if the TOC linked to it.
    #[must_use]
    pub fn lookup(&self, heading_text: &str) -> Option<&str> {
        self.0.get(&normalize_text(heading_text)).map(String::as_str)
    }

    /// Record an entry; a later duplicate key replaces the earlier one.
    pub fn insert(&mut self, text: &str, anchor: &str) {
        let key = normalize_text(text);
        if key.is_empty() || anchor.is_empty() {
            return;
        }
        self.0.insert(key, anchor.to_string());
    }
}

/// Strip tags, collapse whitespace, trim and lower-case.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::extractor::toc::normalize_text;
///
/// assert_eq!(normalize_text("  <b>Getting</b>\n  Started "), "getting started");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let stripped = HTML_TAG.replace_all(text, " ");
    WHITESPACE_NORMALIZE
        .replace_all(&stripped, " ")
        .trim()
        .to_lowercase()
}

/// Build a mapping from a list's in-page links.
///
/// Returns `None` when the list has fewer than [`MIN_TOC_LINKS`] links
/// starting with `#`.
#[must_use]
pub fn extract_toc_mapping(list: &Selection) -> Option<TocMapping> {
    let links = list.select(TOC_LINK_SELECTOR);
    if links.length() < MIN_TOC_LINKS {
        return None;
    }

    let mut mapping = TocMapping::default();
    for node in links.nodes() {
        let link = Selection::from(*node);
        let Some(href) = link.attr("href") else {
            continue;
        };
        let anchor = href.trim().trim_start_matches('#');
        mapping.insert(&link.text(), anchor);
    }

    log::debug!("table of contents detected with {} entries", mapping.len());
    Some(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_normalize_text_variants() {
        assert_eq!(normalize_text("First"), "first");
        assert_eq!(normalize_text("A\t\tB"), "a b");
        assert_eq!(normalize_text("<span>1.</span> Intro"), "1. intro");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_extract_toc_mapping_two_links() {
        let doc = dom::parse(r##"<ul><li><a href="#a">First</a></li><li><a href="#b">Second</a></li></ul>"##);
        let mapping = extract_toc_mapping(&doc.select("ul")).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.lookup("First"), Some("a"));
        assert_eq!(mapping.lookup("  second "), Some("b"));
        assert_eq!(mapping.lookup("Third"), None);
    }

    #[test]
    fn test_single_link_is_not_a_toc() {
        let doc = dom::parse(r##"<ul><li><a href="#a">Only</a></li><li><a href="/page">Other</a></li></ul>"##);
        assert!(extract_toc_mapping(&doc.select("ul")).is_none());
    }

    #[test]
    fn test_nested_toc_links_are_collected() {
        let doc = dom::parse(
            r##"<ol>
                <li><a href="#intro">Intro</a>
                    <ol><li><a href="#intro-why">Why <em>now</em></a></li></ol>
                </li>
            </ol>"##,
        );
        let mapping = extract_toc_mapping(&doc.select("ol").first()).unwrap();

        assert_eq!(mapping.lookup("Why now"), Some("intro-why"));
        assert_eq!(mapping.lookup("intro"), Some("intro"));
    }

    #[test]
    fn test_duplicate_text_last_write_wins() {
        let mut mapping = TocMapping::default();
        mapping.insert("Notes", "n1");
        mapping.insert("NOTES", "n2");

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.lookup("notes"), Some("n2"));
    }

    #[test]
    fn test_empty_keys_and_anchors_skipped() {
        let mut mapping = TocMapping::default();
        mapping.insert("", "a");
        mapping.insert("Text", "");

        assert!(mapping.is_empty());
    }
}
