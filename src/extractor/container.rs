//! Root container resolution.
//!
//! Picks the element(s) whose children are traversed: the configured
//! content selector, then the article-container selector, then `<body>`.
//! A selector matching several elements (a book split into chapters) yields
//! parallel containers in document order.

use dom_query::{Document, NodeId, Selection};

use crate::options::SelectorConfig;
use crate::result::ContainerStrategy;
use crate::selector;

/// Containers chosen for a run.
pub struct ResolvedContainers<'a> {
    /// Roots in document order. Never empty for a parsed document.
    pub roots: Vec<Selection<'a>>,
    /// How the roots were found.
    pub strategy: ContainerStrategy,
    /// Selector that matched, if any.
    pub selector: Option<String>,
    /// Container selectors that failed to parse.
    pub invalid_selectors: Vec<String>,
}

impl ResolvedContainers<'_> {
    /// True when a configured selector matched.
    #[must_use]
    pub fn found(&self) -> bool {
        self.strategy != ContainerStrategy::BodyFallback
    }
}

/// Resolve the root containers for `doc`.
///
/// Never modifies the document. Selectors that fail to parse or match
/// nothing fall through to the next candidate.
#[must_use]
pub fn resolve_containers<'a>(doc: &'a Document, selectors: &SelectorConfig) -> ResolvedContainers<'a> {
    let html = doc.select("html");
    let mut invalid_selectors = Vec::new();

    for candidate in selectors.container_candidates() {
        let compiled = match selector::compile(candidate) {
            Ok(compiled) => compiled,
            Err(err) => {
                log::warn!("ignoring container selector: {err}");
                invalid_selectors.push(candidate.to_string());
                continue;
            }
        };

        let matches = drop_nested(compiled.select_all(&html));
        let (roots, strategy) = match matches.len() {
            0 => continue,
            1 => promote_articles(matches),
            _ => (matches, ContainerStrategy::MultipleContainers),
        };

        log::debug!("container `{candidate}` resolved {} root(s) via {strategy:?}", roots.len());
        return ResolvedContainers {
            roots,
            strategy,
            selector: Some(candidate.to_string()),
            invalid_selectors,
        };
    }

    let body = doc.select("body");
    let root = if body.is_empty() { html } else { body };
    log::debug!("no container selector matched, using document body");
    ResolvedContainers {
        roots: vec![root],
        strategy: ContainerStrategy::BodyFallback,
        selector: None,
        invalid_selectors,
    }
}

/// Split a single container holding several `<article>`s into those
/// articles.
fn promote_articles(single: Vec<Selection<'_>>) -> (Vec<Selection<'_>>, ContainerStrategy) {
    let articles = single
        .first()
        .map(|container| {
            drop_nested(
                container
                    .select("article")
                    .nodes()
                    .iter()
                    .map(|node| Selection::from(*node))
                    .collect(),
            )
        })
        .unwrap_or_default();

    if articles.len() > 1 {
        (articles, ContainerStrategy::PromotedArticles)
    } else {
        (single, ContainerStrategy::Selector)
    }
}

/// Drop matches nested inside an earlier match so containers never overlap.
///
/// Expects document order, where ancestors precede descendants.
fn drop_nested(matches: Vec<Selection<'_>>) -> Vec<Selection<'_>> {
    let mut kept_ids: Vec<NodeId> = Vec::new();
    let mut kept = Vec::with_capacity(matches.len());

    for candidate in matches {
        let Some(node) = candidate.nodes().first().copied() else {
            continue;
        };
        if node.ancestors(None).iter().any(|anc| kept_ids.contains(&anc.id)) {
            continue;
        }
        kept_ids.push(node.id);
        kept.push(candidate);
    }

    kept
}
