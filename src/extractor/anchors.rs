//! Cross-reference anchor ids.
//!
//! Citation and footnote links usually target an inline anchor one level
//! inside the block (`<p><sup><a id="ref-3">`), not the block itself, so the
//! resolver looks inside the element as well as at it.

use dom_query::Selection;

use crate::dom;
use crate::patterns::ANCHOR_DESCENDANT_SELECTOR;

/// Stable anchor id for an element, or an empty string.
///
/// Order: own `id`, own `name`, an `<a>`/`<span>` first child carrying
/// `id`/`name`, then the first citation-like descendant.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::dom;
/// use rs_docblocks::extractor::anchors::get_anchor_id;
///
/// let doc = dom::parse(r##"<p>See <sup><a id="cite-2" href="#n2">2</a></sup></p>"##);
/// assert_eq!(get_anchor_id(&doc.select("p")), "cite-2");
/// ```
#[must_use]
pub fn get_anchor_id(element: &Selection) -> String {
    if let Some(id) = dom::non_empty_attribute(element, "id") {
        return id;
    }
    if let Some(name) = dom::non_empty_attribute(element, "name") {
        return name;
    }

    if let Some(first) = dom::first_element_child(element) {
        if dom::is_one_of(&first, &["a", "span"]) {
            if let Some(id) = id_or_name(&first) {
                return id;
            }
        }
    }

    element
        .select(ANCHOR_DESCENDANT_SELECTOR)
        .nodes()
        .iter()
        .find_map(|node| id_or_name(&Selection::from(*node)))
        .unwrap_or_default()
}

fn id_or_name(sel: &Selection) -> Option<String> {
    dom::non_empty_attribute(sel, "id").or_else(|| dom::non_empty_attribute(sel, "name"))
}

/// Escape a value for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Prefix a fragment with an invisible `<a id name>` marker for `id`.
///
/// Nothing is added when `id` is empty or the fragment already carries an
/// element with that `id` or `name`, so applying it twice is a no-op.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::extractor::anchors::prepend_anchor_marker;
///
/// let once = prepend_anchor_marker("Text", "x");
/// assert_eq!(once, r#"<a id="x" name="x"></a>Text"#);
/// assert_eq!(prepend_anchor_marker(&once, "x"), once);
/// ```
#[must_use]
pub fn prepend_anchor_marker(fragment: &str, id: &str) -> String {
    if id.is_empty() || has_inline_anchor(fragment, id) {
        return fragment.to_string();
    }

    let escaped = escape_attribute(id);
    format!(r#"<a id="{escaped}" name="{escaped}"></a>{fragment}"#)
}

/// Check whether a serialized fragment already carries `id` as an `id` or
/// `name` attribute.
#[must_use]
pub fn has_inline_anchor(fragment: &str, id: &str) -> bool {
    let escaped = escape_attribute(id);
    fragment.contains(&format!(r#" id="{escaped}""#)) || fragment.contains(&format!(r#" name="{escaped}""#))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(html: &str, selector: &str) -> String {
        let doc = dom::parse(html);
        get_anchor_id(&doc.select(selector))
    }

    #[test]
    fn test_own_id_wins() {
        assert_eq!(anchor(r#"<h2 id="s1"><a id="inner">x</a></h2>"#, "h2"), "s1");
    }

    #[test]
    fn test_own_name() {
        assert_eq!(anchor(r#"<a name="top">x</a>"#, "a"), "top");
    }

    #[test]
    fn test_first_child_anchor_or_span() {
        assert_eq!(anchor(r#"<h3><span id="Section_2"></span>Two</h3>"#, "h3"), "Section_2");
        assert_eq!(anchor(r#"<li><a name="fn1"></a>Note</li>"#, "li"), "fn1");
    }

    #[test]
    fn test_nested_citation_descendants() {
        assert_eq!(anchor(r#"<p>Claim<sup id="r7">7</sup></p>"#, "p"), "r7");
        assert_eq!(anchor(r#"<li><b><em id="source-4">Book</em></b></li>"#, "li"), "source-4");
        assert_eq!(anchor(r#"<li><i id="cite_note-1">x</i></li>"#, "li"), "cite_note-1");
    }

    #[test]
    fn test_unrelated_descendant_ids_ignored() {
        assert_eq!(anchor(r#"<p>Hi <em id="emph">there</em></p>"#, "p"), "");
        assert_eq!(anchor(r##"<p>Hello <a href="#s1">there</a></p>"##, "p"), "");
    }

    #[test]
    fn test_blank_id_falls_through() {
        assert_eq!(anchor(r#"<p id=" " name="n">x</p>"#, "p"), "n");
    }

    #[test]
    fn test_prepend_skips_existing_inline_anchor() {
        let fragment = r#"Claim<sup><a id="r7">7</a></sup>"#;
        assert_eq!(prepend_anchor_marker(fragment, "r7"), fragment);
    }

    #[test]
    fn test_prepend_ignores_lookalike_attributes() {
        let out = prepend_anchor_marker(r#"<span data-id="r7">x</span>"#, "r7");
        assert!(out.starts_with(r#"<a id="r7" name="r7"></a>"#));
    }

    #[test]
    fn test_prepend_empty_id_is_noop() {
        assert_eq!(prepend_anchor_marker("x", ""), "x");
    }

    #[test]
    fn test_prepend_escapes_id() {
        let out = prepend_anchor_marker("x", r#"a"b"#);
        assert_eq!(out, r#"<a id="a&quot;b" name="a&quot;b"></a>x"#);
        assert_eq!(prepend_anchor_marker(&out, r#"a"b"#), out);
    }
}
