//! Recursive element traversal.
//!
//! [`process_element`] gates an element through the filters, classifies it
//! and either emits a block or recurses. Infobox brackets are opened and
//! closed in the same call frame, so they stay balanced under nesting.
//! Elements nested deeper than [`MAX_DEPTH`] below a root are skipped.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{INFOBOX_TITLE_CLASS, WHITESPACE_NORMALIZE};
use crate::result::ContentBlock;
use crate::selector::utils;

use super::anchors::get_anchor_id;
use super::context::ExtractionContext;
use super::filter::{self, FilterReason};
use super::handlers;
use super::tags::{is_heading_tag, ElementKind};

/// Nesting depth below a container root past which elements are skipped.
pub const MAX_DEPTH: usize = 256;

/// Visit one element, appending its blocks to `out`.
pub fn process_element(element: &Selection, ctx: &mut ExtractionContext, out: &mut Vec<ContentBlock>) {
    visit(element, 0, ctx, out);
}

fn visit(element: &Selection, depth: usize, ctx: &mut ExtractionContext, out: &mut Vec<ContentBlock>) {
    if depth >= MAX_DEPTH {
        log::trace!("<{}> nested past depth {MAX_DEPTH} skipped", utils::tag(element));
        return;
    }

    if let Some(reason) = filter::is_filtered(element, &ctx.excludes, ctx.probe) {
        ctx.elements_excluded += 1;
        match reason {
            FilterReason::Excluded => log::trace!("excluded <{}>", utils::tag(element)),
            FilterReason::Hidden => log::trace!("hidden <{}>", utils::tag(element)),
        }
        return;
    }
    ctx.elements_processed += 1;

    let kind = ElementKind::of(element);
    match kind {
        ElementKind::Container => {
            process_container(element, depth, ctx, out);
            return;
        }
        ElementKind::Other => return,
        _ => {}
    }

    let anchor_id = get_anchor_id(element);
    let block = match kind {
        ElementKind::Heading(level) => handlers::handle_heading(element, level, anchor_id, ctx),
        ElementKind::Paragraph => handlers::handle_paragraph(element, anchor_id, ctx),
        ElementKind::Image => handlers::handle_image(element, anchor_id, ctx),
        ElementKind::Picture => handlers::handle_picture(element, anchor_id, ctx),
        ElementKind::Figure => handlers::handle_figure(element, anchor_id, ctx),
        ElementKind::Quote => handlers::handle_quote(element, anchor_id, ctx),
        ElementKind::List { ordered } => handlers::handle_list(element, ordered, anchor_id, ctx),
        ElementKind::Code => handlers::handle_code(element, anchor_id),
        ElementKind::Table => handlers::handle_table(element, anchor_id, ctx),
        ElementKind::Separator => Some(handlers::handle_separator(anchor_id)),
        ElementKind::Infobox => {
            process_infobox(element, anchor_id, depth, ctx, out);
            None
        }
        ElementKind::Container | ElementKind::Other => None,
    };
    out.extend(block);
}

/// Generic container: footnotes header on first sight, then every child.
fn process_container(element: &Selection, depth: usize, ctx: &mut ExtractionContext, out: &mut Vec<ContentBlock>) {
    if !ctx.footnotes_header_added && utils::id_class_lower(element).contains("footnotes") {
        out.extend(handlers::footnotes_header(ctx));
        ctx.footnotes_header_added = true;
    }

    for child in dom::element_children(element) {
        visit(&child, depth + 1, ctx, out);
    }
}

/// Bracket an infobox's children between start and end markers.
fn process_infobox(
    element: &Selection,
    anchor_id: String,
    depth: usize,
    ctx: &mut ExtractionContext,
    out: &mut Vec<ContentBlock>,
) {
    let children = dom::element_children(element);
    let title_source = find_title_source(&children);
    let title = title_source
        .map(|source| {
            WHITESPACE_NORMALIZE
                .replace_all(&dom::text_content(source), " ")
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    out.push(ContentBlock::InfoboxStart { title, id: anchor_id });
    for child in &children {
        if title_source.is_some_and(|source| dom::same_node(source, child)) {
            continue;
        }
        visit(child, depth + 1, ctx, out);
    }
    out.push(ContentBlock::InfoboxEnd);
}

/// The child naming an infobox: `<summary>`, then a title-classed child,
/// then a heading.
fn find_title_source<'s, 'a>(children: &'s [Selection<'a>]) -> Option<&'s Selection<'a>> {
    children
        .iter()
        .find(|child| dom::is_one_of(child, &["summary"]))
        .or_else(|| {
            children
                .iter()
                .find(|child| INFOBOX_TITLE_CLASS.is_match(&utils::class(child)))
        })
        .or_else(|| {
            children
                .iter()
                .find(|child| dom::tag_name(child).is_some_and(|t| is_heading_tag(&t)))
        })
}
