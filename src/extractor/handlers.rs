//! Block constructors for leaf content elements.
//!
//! Each handler turns one classified element into at most one
//! [`ContentBlock`]. Handlers never recurse into the traversal; containers
//! and infoboxes are handled in [`super::traversal`].

use dom_query::Selection;

use crate::dom;
use crate::patterns::LANGUAGE_CLASS;
use crate::result::{ContentBlock, ListItem};
use crate::selector::utils;

use super::anchors::{get_anchor_id, prepend_anchor_marker};
use super::context::ExtractionContext;
use super::filter;
use super::fragment::{clean_fragment, Fragment};
use super::images::resolve_image;
use super::tags::SEPARATOR_CHARS;
use super::toc::extract_toc_mapping;

/// Fixed anchor id of the injected footnotes heading.
pub const FOOTNOTES_HEADING_ID: &str = "footnotes-section";

fn fragment(element: &Selection, ctx: &ExtractionContext) -> Fragment {
    clean_fragment(element, &ctx.excludes, &ctx.base_url)
}

fn author<'r>(ctx: &ExtractionContext<'r>) -> Option<&'r str> {
    ctx.options.author.as_deref().map(str::trim).filter(|a| !a.is_empty())
}

/// Check whether text is exactly the page author.
fn is_author_text(text: &str, ctx: &ExtractionContext) -> bool {
    author(ctx).is_some_and(|author| text == author)
}

/// Check whether heading text is the author or a short byline naming them.
fn is_byline_text(text: &str, ctx: &ExtractionContext) -> bool {
    author(ctx).is_some_and(|author| {
        text == author || (text.chars().count() < ctx.options.byline_max_chars && text.contains(author))
    })
}

fn is_title_text(text: &str, ctx: &ExtractionContext) -> bool {
    ctx.options
        .title
        .as_deref()
        .map(str::trim)
        .is_some_and(|title| !title.is_empty() && text == title)
}

/// One to three divider characters and nothing else.
fn is_separator_text(text: &str) -> bool {
    let compact: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    (1..=3).contains(&compact.len()) && compact.iter().all(|c| SEPARATOR_CHARS.contains(c))
}

/// Process `h1`..`h6`.
///
/// Headings repeating the page title or author byline are dropped. The id
/// comes from the anchor, then the TOC mapping, then the next synthetic
/// number.
pub fn handle_heading(
    element: &Selection,
    level: u8,
    anchor_id: String,
    ctx: &mut ExtractionContext,
) -> Option<ContentBlock> {
    let content = fragment(element, ctx);
    if content.is_empty() {
        return None;
    }
    if is_title_text(&content.text, ctx) || is_byline_text(&content.text, ctx) {
        log::trace!("heading dropped as title/byline: {}", content.text);
        return None;
    }

    let id = if !anchor_id.is_empty() {
        anchor_id
    } else if let Some(mapped) = ctx.toc_mapping.lookup(&content.text) {
        mapped.to_string()
    } else {
        ctx.next_heading_number()
    };

    ctx.record_heading(&id);
    Some(ContentBlock::Heading {
        level,
        text: content.html,
        id,
    })
}

/// Process `<p>`.
pub fn handle_paragraph(element: &Selection, anchor_id: String, ctx: &ExtractionContext) -> Option<ContentBlock> {
    let content = fragment(element, ctx);
    if content.is_empty() || is_author_text(&content.text, ctx) || is_separator_text(&content.text) {
        return None;
    }

    Some(ContentBlock::Paragraph {
        text: prepend_anchor_marker(&content.html, &anchor_id),
        id: anchor_id,
    })
}

/// Process a bare `<img>`.
///
/// Images inside a `<figure>` are left to the figure.
pub fn handle_image(img: &Selection, anchor_id: String, ctx: &mut ExtractionContext) -> Option<ContentBlock> {
    if dom::closest_tag(img, "figure").is_some() {
        log::trace!("image inside figure deferred to the figure");
        return None;
    }

    let picture = dom::closest_tag(img, "picture");
    let src = resolve_image(img, picture.as_ref(), ctx)?;
    Some(ContentBlock::Image {
        src,
        alt: alt_text(img),
        id: anchor_id,
    })
}

/// Process `<picture>` through its `<img>`, or its sources alone.
pub fn handle_picture(picture: &Selection, anchor_id: String, ctx: &mut ExtractionContext) -> Option<ContentBlock> {
    let img = picture.select("img").first();
    let target = if img.is_empty() { picture.clone() } else { img };

    let src = resolve_image(&target, Some(picture), ctx)?;
    Some(ContentBlock::Image {
        src,
        alt: alt_text(&target),
        id: anchor_id,
    })
}

/// Process `<figure>`: the caption HTML becomes the alt text.
pub fn handle_figure(figure: &Selection, anchor_id: String, ctx: &mut ExtractionContext) -> Option<ContentBlock> {
    let img = figure.select("img").first();
    if img.is_empty() {
        return None;
    }

    let src = resolve_image(&img, Some(figure), ctx)?;

    let caption = figure.select("figcaption").first();
    let caption_html = if caption.is_empty() {
        String::new()
    } else {
        fragment(&caption, ctx).html
    };
    let alt = if caption_html.is_empty() {
        alt_text(&img)
    } else {
        caption_html
    };

    Some(ContentBlock::Image { src, alt, id: anchor_id })
}

fn alt_text(img: &Selection) -> String {
    dom::non_empty_attribute(img, "alt").unwrap_or_default()
}

/// Process `<blockquote>`.
pub fn handle_quote(element: &Selection, anchor_id: String, ctx: &ExtractionContext) -> Option<ContentBlock> {
    let content = fragment(element, ctx);
    if content.is_empty() {
        return None;
    }
    Some(ContentBlock::Quote {
        text: content.html,
        id: anchor_id,
    })
}

/// Process `<ul>`/`<ol>`.
///
/// While the run has no TOC mapping, the list is first tried as a table of
/// contents. It is emitted as a list either way.
pub fn handle_list(
    element: &Selection,
    ordered: bool,
    anchor_id: String,
    ctx: &mut ExtractionContext,
) -> Option<ContentBlock> {
    if ctx.toc_mapping.is_empty() {
        if let Some(mapping) = extract_toc_mapping(element) {
            ctx.toc_mapping = mapping;
        }
    }

    let ctx = &*ctx;
    let items: Vec<ListItem> = dom::element_children(element)
        .iter()
        .filter(|child| dom::is_one_of(child, &["li"]))
        .filter(|li| filter::is_filtered(li, &ctx.excludes, ctx.probe).is_none())
        .filter_map(|li| {
            let content = fragment(li, ctx);
            if content.is_empty() {
                return None;
            }
            let id = get_anchor_id(li);
            Some(ListItem {
                html: prepend_anchor_marker(&content.html, &id),
                id,
            })
        })
        .collect();

    if items.is_empty() {
        return None;
    }
    Some(ContentBlock::List {
        ordered,
        items,
        id: anchor_id,
    })
}

/// Process `<pre>`, reading the language from an inner `<code>`.
#[must_use]
pub fn handle_code(element: &Selection, anchor_id: String) -> Option<ContentBlock> {
    let code = element.select("code").first();
    let (text, language) = if code.is_empty() {
        (dom::text_content(element), None)
    } else {
        let language = LANGUAGE_CLASS
            .captures(&utils::class(&code))
            .map(|caps| caps[1].to_string());
        (dom::text_content(&code), language)
    };

    let text = text.trim_matches(['\n', '\r']).to_string();
    if text.trim().is_empty() {
        return None;
    }

    Some(ContentBlock::Code {
        language: language.unwrap_or_else(|| "text".to_string()),
        text,
        id: anchor_id,
    })
}

/// Process `<table>`: `th` texts as headers, `tbody` rows of `td` fragments.
///
/// Rows and headers of nested tables are left out.
pub fn handle_table(table: &Selection, anchor_id: String, ctx: &ExtractionContext) -> Option<ContentBlock> {
    let owned_by_table = |cell: &Selection| dom::closest_tag(cell, "table").is_some_and(|t| dom::same_node(&t, table));

    let headers: Vec<String> = table
        .select("th")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|th| owned_by_table(th))
        .map(|th| dom::trimmed_text(&th))
        .collect();

    let rows: Vec<Vec<String>> = table
        .select("tbody tr")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|tr| owned_by_table(tr))
        .map(|tr| {
            dom::element_children(&tr)
                .iter()
                .filter(|cell| dom::is_one_of(cell, &["td"]))
                .map(|td| fragment(td, ctx).html)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    if headers.is_empty() && rows.is_empty() {
        return None;
    }
    Some(ContentBlock::Table {
        headers,
        rows,
        id: anchor_id,
    })
}

/// Process `<hr>`.
#[must_use]
pub fn handle_separator(anchor_id: String) -> ContentBlock {
    ContentBlock::Separator { id: anchor_id }
}

/// Separator plus level-2 heading opening the footnotes section.
#[must_use]
pub fn footnotes_header(ctx: &ExtractionContext) -> [ContentBlock; 2] {
    [
        ContentBlock::Separator { id: String::new() },
        ContentBlock::Heading {
            level: 2,
            text: ctx.options.footnotes_heading.clone(),
            id: FOOTNOTES_HEADING_ID.to_string(),
        },
    ]
}
