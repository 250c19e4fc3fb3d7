//! Render-state queries.
//!
//! A parsed document has no layout, so everything that needs the browser's
//! view of an element (computed visibility, the chosen `currentSrc`, the
//! decoded image size) goes through the [`RenderProbe`] trait. Hosts holding
//! a live page implement it; [`StaticProbe`] answers from markup alone.

use dom_query::Selection;

use crate::dom;
use crate::error::Result;
use crate::patterns::HIDDEN_STYLE;

/// Computed visibility of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Rendered.
    Visible,
    /// `display: none`.
    DisplayNone,
    /// `visibility: hidden`.
    Hidden,
}

impl Visibility {
    /// True for `display: none` and `visibility: hidden`.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        !matches!(self, Self::Visible)
    }
}

/// Source of layout-dependent facts about elements.
///
/// Implementations may fail; the engine treats a failed visibility query as
/// visible and a missing `current_src`/`natural_size` as unknown.
pub trait RenderProbe {
    /// Computed `display`/`visibility` of the element.
    fn visibility(&self, element: &Selection) -> Result<Visibility>;

    /// The URL the browser picked for an `<img>`, if known.
    fn current_src(&self, _img: &Selection) -> Option<String> {
        None
    }

    /// Decoded pixel size `(width, height)` of an `<img>`, if known.
    fn natural_size(&self, img: &Selection) -> Option<(u32, u32)> {
        match (
            dom::dimension_attribute(img, "width"),
            dom::dimension_attribute(img, "height"),
        ) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

/// Markup-only probe: the `hidden` attribute and inline `style`.
///
/// Stylesheet rules are not evaluated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProbe;

impl RenderProbe for StaticProbe {
    fn visibility(&self, element: &Selection) -> Result<Visibility> {
        if element.has_attr("hidden") {
            return Ok(Visibility::DisplayNone);
        }

        let Some(style) = element.attr("style") else {
            return Ok(Visibility::Visible);
        };

        if !HIDDEN_STYLE.is_match(&style) {
            return Ok(Visibility::Visible);
        }

        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if compact.contains("display:none") {
            Ok(Visibility::DisplayNone)
        } else {
            Ok(Visibility::Hidden)
        }
    }
}

/// Visibility check that never fails: probe errors count as visible.
#[must_use]
pub fn is_hidden(probe: &dyn RenderProbe, element: &Selection) -> bool {
    match probe.visibility(element) {
        Ok(visibility) => visibility.is_hidden(),
        Err(err) => {
            log::trace!("style query failed, treating element as visible: {err}");
            false
        }
    }
}
