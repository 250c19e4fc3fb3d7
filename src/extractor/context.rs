//! Extraction state tracking.
//!
//! `ExtractionContext` holds everything one run mutates: counters, the image
//! dedup set, the footnotes latch and the TOC mapping. A fresh context is
//! built per call and threaded through the traversal by `&mut`, so
//! concurrent extractions never share state.

use std::collections::HashSet;

use url::Url;

use crate::options::Options;
use crate::probe::RenderProbe;
use crate::selector::SelectorSet;

use super::toc::TocMapping;

/// Run-scoped extraction state.
pub struct ExtractionContext<'r> {
    /// Caller options.
    pub options: &'r Options,

    /// Base URL links and images are resolved against.
    pub base_url: Url,

    /// Compiled exclude selectors.
    pub excludes: SelectorSet,

    /// Layout queries.
    pub probe: &'r dyn RenderProbe,

    /// Normalized URLs of images already emitted.
    added_image_urls: HashSet<String>,

    /// Ids of the headings emitted so far.
    heading_ids: HashSet<String>,

    /// Headings emitted so far.
    pub heading_count: usize,

    /// Elements that passed the filters.
    pub elements_processed: usize,

    /// Elements dropped by excludes or visibility.
    pub elements_excluded: usize,

    /// Set once the footnotes heading has been emitted.
    pub footnotes_header_added: bool,

    /// Heading text to anchor id, from the first TOC-like list.
    pub toc_mapping: TocMapping,
}

impl<'r> ExtractionContext<'r> {
    /// Create a fresh context for one run.
    #[must_use]
    pub fn new(options: &'r Options, base_url: Url, excludes: SelectorSet, probe: &'r dyn RenderProbe) -> Self {
        Self {
            options,
            base_url,
            excludes,
            probe,
            added_image_urls: HashSet::new(),
            heading_ids: HashSet::new(),
            heading_count: 0,
            elements_processed: 0,
            elements_excluded: 0,
            footnotes_header_added: false,
            toc_mapping: TocMapping::default(),
        }
    }

    /// Record an image URL. Returns `false` when it was already emitted.
    pub fn register_image(&mut self, normalized_url: String) -> bool {
        self.added_image_urls.insert(normalized_url)
    }

    /// Next synthetic heading id: `heading_count + 1`, moved past numbers
    /// an earlier heading already carries.
    #[must_use]
    pub fn next_heading_number(&self) -> String {
        let mut number = self.heading_count + 1;
        while self.heading_ids.contains(&number.to_string()) {
            number += 1;
        }
        number.to_string()
    }

    /// Record an emitted heading and its id.
    pub fn record_heading(&mut self, id: &str) {
        self.heading_ids.insert(id.to_string());
        self.heading_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StaticProbe;

    fn context(options: &Options) -> ExtractionContext<'_> {
        let base = Url::parse("https://example.com/").unwrap();
        ExtractionContext::new(options, base, SelectorSet::default(), &StaticProbe)
    }

    #[test]
    fn test_fresh_context_is_empty() {
        let options = Options::default();
        let ctx = context(&options);

        assert_eq!(ctx.heading_count, 0);
        assert_eq!(ctx.elements_processed, 0);
        assert_eq!(ctx.elements_excluded, 0);
        assert!(!ctx.footnotes_header_added);
        assert!(ctx.toc_mapping.is_empty());
    }

    #[test]
    fn test_register_image_is_exact_once() {
        let options = Options::default();
        let mut ctx = context(&options);

        assert!(ctx.register_image("/a.jpg".to_string()));
        assert!(!ctx.register_image("/a.jpg".to_string()));
        assert!(ctx.register_image("/b.jpg".to_string()));
    }

    #[test]
    fn test_next_heading_number_follows_count() {
        let options = Options::default();
        let mut ctx = context(&options);

        assert_eq!(ctx.next_heading_number(), "1");
        ctx.heading_count = 4;
        assert_eq!(ctx.next_heading_number(), "5");
    }

    #[test]
    fn test_next_heading_number_skips_taken_ids() {
        let options = Options::default();
        let mut ctx = context(&options);

        ctx.record_heading("2");
        assert_eq!(ctx.next_heading_number(), "3");
        ctx.record_heading("3");
        assert_eq!(ctx.next_heading_number(), "4");
        assert_eq!(ctx.heading_count, 2);
    }

    #[test]
    fn test_contexts_are_independent() {
        let options = Options::default();
        let mut first = context(&options);
        let mut second = context(&options);

        first.register_image("/shared.jpg".to_string());
        first.heading_count = 3;

        assert!(second.register_image("/shared.jpg".to_string()));
        assert_eq!(second.heading_count, 0);
    }
}
