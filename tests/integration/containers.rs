//! Container resolution on whole pages
//!
//! Configured selectors, multi-chapter pages, promoted articles and the
//! body fallback, checked through the public API.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_docblocks::{extract, ContainerStrategy, ContentBlock, SelectorConfig};

fn heading_texts(blocks: &[ContentBlock]) -> Vec<&str> {
    blocks
        .iter()
        .filter_map(|b| match b {
            ContentBlock::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

const BOOK: &str = r#"
<html><body>
    <header><h1>Site name</h1></header>
    <div class="chapter"><h2>Chapter 1</h2><p>Once upon a time.</p></div>
    <div class="promo"><h2>Subscribe</h2></div>
    <div class="chapter"><h2>Chapter 2</h2><p>The end.</p></div>
</body></html>"#;

#[test]
fn test_content_selector_chosen_first() {
    let selectors = SelectorConfig {
        content: Some(".chapter".to_string()),
        article_container: Some("body".to_string()),
        exclude: Vec::new(),
    };

    let result = extract(BOOK, &selectors).expect("extract");

    assert_eq!(heading_texts(&result.blocks), vec!["Chapter 1", "Chapter 2"]);
    assert_eq!(result.diagnostics.container_selector.as_deref(), Some(".chapter"));
}

#[test]
fn test_multi_chapter_page_concatenates_in_order() {
    let result = extract(BOOK, &SelectorConfig::with_content(".chapter")).expect("extract");

    assert_eq!(result.diagnostics.strategy, ContainerStrategy::MultipleContainers);
    assert_eq!(result.diagnostics.container_count, 2);
    assert!(result.diagnostics.container_found);

    let ids: Vec<&str> = result.blocks.iter().map(ContentBlock::id).collect();
    assert_eq!(ids, vec!["1", "", "2", ""]);
}

#[test]
fn test_article_container_used_when_content_misses() {
    let selectors = SelectorConfig {
        content: Some(".entry-content".to_string()),
        article_container: Some("div.chapter".to_string()),
        exclude: Vec::new(),
    };

    let result = extract(BOOK, &selectors).expect("extract");
    assert_eq!(result.diagnostics.container_selector.as_deref(), Some("div.chapter"));
}

#[test]
fn test_feed_of_articles_promoted() {
    let html = r#"
        <main id="feed">
            <div class="toolbar"><p>Sort by</p></div>
            <article><h2>First post</h2><p>One.</p></article>
            <article><h2>Second post</h2><p>Two.</p></article>
        </main>"#;

    let result = extract(html, &SelectorConfig::with_content("#feed")).expect("extract");

    assert_eq!(result.diagnostics.strategy, ContainerStrategy::PromotedArticles);
    assert_eq!(result.diagnostics.container_count, 2);
    assert_eq!(heading_texts(&result.blocks), vec!["First post", "Second post"]);
    assert!(result
        .blocks
        .iter()
        .all(|b| !matches!(b, ContentBlock::Paragraph { text, .. } if text == "Sort by")));
}

#[test]
fn test_single_article_not_promoted() {
    let html = r#"<main><p>Intro</p><article><p>Story</p></article></main>"#;

    let result = extract(html, &SelectorConfig::with_content("main")).expect("extract");

    assert_eq!(result.diagnostics.strategy, ContainerStrategy::Selector);
    assert_eq!(result.blocks.len(), 2);
}

#[test]
fn test_body_fallback_scans_everything() {
    let result = extract(BOOK, &SelectorConfig::with_content(".missing")).expect("extract");

    assert_eq!(result.diagnostics.strategy, ContainerStrategy::BodyFallback);
    assert!(!result.diagnostics.container_found);
    assert!(result.diagnostics.container_selector.is_none());
    // <header> is not a container tag, so the site name is never reached.
    assert_eq!(heading_texts(&result.blocks), vec!["Chapter 1", "Subscribe", "Chapter 2"]);
}

#[test]
fn test_excludes_apply_inside_chosen_container() {
    let selectors = SelectorConfig {
        content: Some("article".to_string()),
        article_container: None,
        exclude: vec![".related".to_string(), "p.note".to_string()],
    };
    let html = r#"
        <article>
            <p>Lead.</p>
            <p class="note">Editor's note.</p>
            <section class="related"><h3>Read next</h3></section>
        </article>"#;

    let result = extract(html, &selectors).expect("extract");

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.diagnostics.elements_excluded, 2);
}
