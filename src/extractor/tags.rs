//! Element kinds and the tag lists behind them.
//!
//! The traversal dispatches on [`ElementKind`] rather than on raw tag
//! strings. Anything not listed here maps to [`ElementKind::Other`], which
//! emits nothing and is not descended into.

use dom_query::Selection;

use crate::dom;
use crate::selector::utils;

/// Class substrings marking a `<div>` as an infobox region.
pub static INFOBOX_CLASSES: [&str; 9] = [
    "spoiler",
    "interview",
    "terminology",
    "infobox",
    "note-box",
    "callout",
    "aside-box",
    "expandable",
    "collapsible",
];

/// Tags that are always infobox regions.
pub static INFOBOX_TAGS: [&str; 2] = ["aside", "details"];

/// Tags recursed into as plain containers.
pub static CONTAINER_TAGS: [&str; 4] = ["div", "section", "article", "main"];

/// Characters that, alone, make a paragraph a decorative divider.
pub static SEPARATOR_CHARS: [char; 6] = ['—', '–', '•', '·', '.', '*'];

/// Normalized element kind used for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `h1`..`h6` with its level.
    Heading(u8),
    /// `p`
    Paragraph,
    /// `img`
    Image,
    /// `picture`
    Picture,
    /// `figure`
    Figure,
    /// `blockquote`
    Quote,
    /// `ul` / `ol`
    List {
        /// `true` for `ol`.
        ordered: bool,
    },
    /// `pre`
    Code,
    /// `table`
    Table,
    /// `hr`
    Separator,
    /// `aside`, `details`, or a div with an infobox class.
    Infobox,
    /// `div`, `section`, `article`, `main`
    Container,
    /// Everything else.
    Other,
}

impl ElementKind {
    /// Classify an element.
    #[must_use]
    pub fn of(sel: &Selection) -> Self {
        let Some(tag) = dom::tag_name(sel) else {
            return Self::Other;
        };

        match tag.as_str() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "img" => Self::Image,
            "picture" => Self::Picture,
            "figure" => Self::Figure,
            "blockquote" => Self::Quote,
            "ul" => Self::List { ordered: false },
            "ol" => Self::List { ordered: true },
            "pre" => Self::Code,
            "table" => Self::Table,
            "hr" => Self::Separator,
            "aside" | "details" => Self::Infobox,
            "div" if is_infobox_div(sel) => Self::Infobox,
            t if CONTAINER_TAGS.contains(&t) => Self::Container,
            _ => Self::Other,
        }
    }
}

/// Check whether an element is a `<div>` whose class marks an infobox.
#[must_use]
pub fn is_infobox_div(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("div") && utils::class_contains_any(sel, &INFOBOX_CLASSES)
}

/// Check whether an element is bracketed as an infobox region.
#[must_use]
pub fn is_infobox(sel: &Selection) -> bool {
    dom::is_one_of(sel, &INFOBOX_TAGS) || is_infobox_div(sel)
}

/// Check whether a heading-like tag name is `h1`..`h6`.
#[must_use]
pub fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}
