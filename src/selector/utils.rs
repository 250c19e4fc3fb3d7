//! Utility functions for selector pattern matching
//!
//! Attribute shortcuts returning empty strings instead of `Option`, for the
//! class/id substring rules used by the classifier.

use crate::dom;
use dom_query::Selection;

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Lower-cased class attribute.
#[must_use]
pub fn class_lower(sel: &Selection) -> String {
    class(sel).to_lowercase()
}

/// Lower-cased id and class joined with a space, for substring rules.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::selector::utils;
/// use rs_docblocks::dom;
///
/// let doc = dom::parse(r#"<div id="Footnotes-List" class="refs">text</div>"#);
/// let div = doc.select("div");
///
/// let combined = utils::id_class_lower(&div);
/// assert!(combined.contains("footnotes"));
/// assert!(combined.contains("refs"));
/// ```
#[must_use]
pub fn id_class_lower(sel: &Selection) -> String {
    format!("{} {}", id(sel), class(sel)).to_lowercase()
}

/// Check whether the lower-cased class contains any of `needles`.
#[must_use]
pub fn class_contains_any(sel: &Selection, needles: &[&str]) -> bool {
    let class = class_lower(sel);
    !class.is_empty() && needles.iter().any(|needle| class.contains(needle))
}
