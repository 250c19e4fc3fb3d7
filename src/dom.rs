//! DOM Operations Adapter
//!
//! Read-only element operations over the `dom_query` crate. The extraction
//! engine never writes to the input document; everything here is a query.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get a non-blank attribute value, trimmed.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a numeric dimension attribute such as `width="80"` or `width="80px"`.
#[must_use]
pub fn dimension_attribute(sel: &Selection, name: &str) -> Option<u32> {
    let raw = sel.attr(name)?;
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Check whether the first node of the selection is one of `tags`.
#[must_use]
pub fn is_one_of(sel: &Selection, tags: &[&str]) -> bool {
    tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get trimmed text content as an owned string.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Tree Navigation ===

/// Direct element children in document order (text and comments skipped).
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .first()
        .map(|node| {
            node.children()
                .into_iter()
                .filter(dom_query::NodeRef::is_element)
                .map(Selection::from)
                .collect()
        })
        .unwrap_or_default()
}

/// First element child, skipping text nodes.
#[must_use]
pub fn first_element_child<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    element_children(sel).into_iter().next()
}

/// Element ancestors, nearest first.
#[must_use]
pub fn ancestors<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .first()
        .map(|node| {
            node.ancestors(None)
                .into_iter()
                .filter(dom_query::NodeRef::is_element)
                .map(Selection::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Nearest ancestor with the given tag name.
#[must_use]
pub fn closest_tag<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    ancestors(sel)
        .into_iter()
        .find(|anc| tag_name(anc).as_deref() == Some(tag))
}

/// Check whether two selections point at the same node.
#[must_use]
pub fn same_node(a: &Selection, b: &Selection) -> bool {
    match (a.nodes().first(), b.nodes().first()) {
        (Some(x), Some(y)) => x.id == y.id,
        _ => false,
    }
}

// === Private Copies ===
//
// Writes below are only ever applied to documents produced by
// `clone_inner`, never to the caller's document.

/// Set attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove elements from their document
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Re-parse an element's inner HTML into a standalone document.
///
/// The children end up under the new document's `<body>`.
#[must_use]
pub fn clone_inner(sel: &Selection) -> Document {
    Document::from(format!("<html><body>{}</body></html>", inner_html(sel)))
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
