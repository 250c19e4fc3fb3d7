//! Exclusion and visibility gates.
//!
//! Every visited element passes through [`is_filtered`] before it is
//! classified. Infobox regions are exempt from exclude selectors so they can
//! be bracketed instead of silently dropped.

use dom_query::Selection;

use crate::probe::{self, RenderProbe};
use crate::selector::SelectorSet;

use super::tags;

/// Why an element was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// The element or an ancestor matched an exclude selector.
    Excluded,
    /// The element's computed style hides it.
    Hidden,
}

/// Check whether an element is noise according to the exclude selectors.
///
/// Infobox divs, `<aside>` and `<details>` are never excluded.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::dom;
/// use rs_docblocks::extractor::filter::should_exclude;
/// use rs_docblocks::selector::SelectorSet;
///
/// let doc = dom::parse(r#"<div class="share"><p>Tweet</p></div><aside class="share">Note</aside>"#);
/// let excludes = SelectorSet::compile_all(&[".share"]);
///
/// assert!(should_exclude(&doc.select("p"), &excludes));
/// assert!(!should_exclude(&doc.select("aside"), &excludes));
/// ```
#[must_use]
pub fn should_exclude(element: &Selection, excludes: &SelectorSet) -> bool {
    if tags::is_infobox(element) {
        return false;
    }
    excludes.matches_self_or_ancestor(element)
}

/// Run both gates, exclusion first.
#[must_use]
pub fn is_filtered(element: &Selection, excludes: &SelectorSet, probe: &dyn RenderProbe) -> Option<FilterReason> {
    if should_exclude(element, excludes) {
        return Some(FilterReason::Excluded);
    }
    if probe::is_hidden(probe, element) {
        return Some(FilterReason::Hidden);
    }
    None
}
