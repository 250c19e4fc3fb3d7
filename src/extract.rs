//! Run entry point.
//!
//! Resolves the containers, walks each container's children in document
//! order and collects the blocks and counters into an [`ExtractResult`].

use crate::dom::{self, Document};
use crate::error::Result;
use crate::extractor::container::resolve_containers;
use crate::extractor::traversal::process_element;
use crate::extractor::ExtractionContext;
use crate::options::{Options, SelectorConfig};
use crate::probe::RenderProbe;
use crate::result::{Diagnostics, ExtractResult};
use crate::selector::SelectorSet;
use crate::url_utils::resolve_base_url;

/// Extract blocks from a parsed document.
///
/// Fails only when `options.base_url` is set but not absolute.
pub(crate) fn extract_blocks(
    doc: &Document,
    selectors: &SelectorConfig,
    options: &Options,
    probe: &dyn RenderProbe,
) -> Result<ExtractResult> {
    let base_url = resolve_base_url(options.base_url.as_deref(), doc)?;
    log::debug!("starting extraction (base url {base_url})");

    let excludes = SelectorSet::compile_all(&selectors.exclude);
    let containers = resolve_containers(doc, selectors);

    let mut invalid_selectors = containers.invalid_selectors.clone();
    invalid_selectors.extend(excludes.invalid().iter().cloned());

    let mut ctx = ExtractionContext::new(options, base_url, excludes, probe);
    let mut blocks = Vec::new();

    for root in &containers.roots {
        for child in dom::element_children(root) {
            process_element(&child, &mut ctx, &mut blocks);
        }
    }

    let diagnostics = Diagnostics {
        container_found: containers.found(),
        container_selector: containers.selector.clone(),
        strategy: containers.strategy,
        container_count: containers.roots.len(),
        elements_processed: ctx.elements_processed,
        elements_excluded: ctx.elements_excluded,
        heading_count: ctx.heading_count,
        invalid_selectors,
    };

    log::debug!(
        "extracted {} blocks ({} processed, {} excluded, {} headings)",
        blocks.len(),
        diagnostics.elements_processed,
        diagnostics.elements_excluded,
        diagnostics.heading_count
    );

    Ok(ExtractResult { blocks, diagnostics })
}
