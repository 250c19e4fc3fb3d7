//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and soft failures.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_docblocks::{extract, ContentBlock, Error, ExtractResult, SelectorConfig};

fn run(html: &str, selectors: &SelectorConfig) -> ExtractResult {
    match extract(html, selectors) {
        Ok(result) => result,
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_empty_input() {
    let result = run("", &SelectorConfig::default());

    assert!(result.blocks.is_empty());
    assert_eq!(result.require_content(), Err(Error::NoContent));
}

#[test]
fn test_extract_empty_body() {
    let result = run("<html><body></body></html>", &SelectorConfig::with_content("article"));

    assert!(result.blocks.is_empty());
    assert!(!result.diagnostics.container_found);
    assert_eq!(result.diagnostics.elements_processed, 0);
}

#[test]
fn test_malformed_selectors_never_abort() {
    let selectors = SelectorConfig {
        content: Some("div[".to_string()),
        article_container: Some(">>>".to_string()),
        exclude: vec!["::nope(".to_string(), ".ad".to_string()],
    };
    let html = r#"<p>Kept</p><div class="ad"><p>Dropped</p></div>"#;

    let result = run(html, &selectors);

    assert_eq!(
        result.blocks,
        vec![ContentBlock::Paragraph {
            text: "Kept".to_string(),
            id: String::new(),
        }]
    );
    assert_eq!(result.diagnostics.invalid_selectors.len(), 3);
    assert_eq!(result.diagnostics.elements_excluded, 1);
}

#[test]
fn test_excluded_descendants_removed_from_fragments() {
    let selectors = SelectorConfig {
        content: None,
        article_container: None,
        exclude: vec![".inline-ad".to_string()],
    };
    let html = r#"<p>Story text<span class="inline-ad">Buy now</span><script>track()</script></p>"#;

    let result = run(html, &selectors);

    assert_eq!(
        result.blocks,
        vec![ContentBlock::Paragraph {
            text: "Story text".to_string(),
            id: String::new(),
        }]
    );
}

#[test]
fn test_blank_and_divider_paragraphs_skipped() {
    let html = "<p>   </p><p>\u{2022}</p><p>* * *</p><p>Real text</p>";

    let result = run(html, &SelectorConfig::default());
    assert_eq!(result.blocks.len(), 1);
}

#[test]
fn test_empty_infobox_still_bracketed() {
    let result = run("<aside></aside>", &SelectorConfig::default());

    assert_eq!(
        result.blocks,
        vec![
            ContentBlock::InfoboxStart {
                title: String::new(),
                id: String::new(),
            },
            ContentBlock::InfoboxEnd,
        ]
    );
}

#[test]
fn test_infobox_inside_excluded_region_dropped() {
    let selectors = SelectorConfig {
        content: None,
        article_container: None,
        exclude: vec!["footer".to_string()],
    };
    let html = r#"<div><footer><div class="callout"><p>Promo</p></div></footer><p>Body</p></div>"#;

    let result = run(html, &selectors);
    assert!(result
        .blocks
        .iter()
        .all(|b| !matches!(b, ContentBlock::InfoboxStart { .. } | ContentBlock::InfoboxEnd)));
}

#[test]
fn test_deeply_nested_containers() {
    let depth = 100;
    let html = format!("{}<p>Deep</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let result = run(&html, &SelectorConfig::default());
    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.diagnostics.elements_processed, depth + 1);
}

#[test]
fn test_hostile_nesting_does_not_abort() {
    let depth = 5000;
    let html = format!(
        "{}<p>Buried</p>{}<p>Visible</p>",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );

    let result = run(&html, &SelectorConfig::default());
    assert_eq!(
        result.blocks,
        vec![ContentBlock::Paragraph {
            text: "Visible".to_string(),
            id: String::new(),
        }]
    );
}

#[test]
fn test_unicode_content_preserved() {
    let html = "<h2>Über Straße</h2><p>日本語のテキスト 🚀</p>";

    let result = run(html, &SelectorConfig::default());
    assert!(matches!(&result.blocks[0], ContentBlock::Heading { text, .. } if text == "Über Straße"));
    assert!(matches!(&result.blocks[1], ContentBlock::Paragraph { text, .. } if text.contains('🚀')));
}

#[test]
fn test_unknown_elements_not_descended() {
    let html = "<nav><p>Menu</p></nav><span><p>Inline</p></span><p>Body</p>";

    let result = run(html, &SelectorConfig::default());
    assert_eq!(result.blocks.len(), 1);
}

#[test]
fn test_lazy_image_without_src() {
    let html = r#"<img data-src="/img/lazy.jpg" src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">"#;

    let result = run(html, &SelectorConfig::default());
    assert_eq!(result.image_sources().collect::<Vec<_>>(), vec!["http://localhost/img/lazy.jpg"]);
}

#[test]
fn test_avatar_and_cdn_thumbnails_dropped() {
    let html = r#"
        <img class="author-avatar" src="/u/jane.jpg">
        <img src="https://www.gravatar.com/avatar/abc?s=48">
        <img src="/uploads/photo-80x80.jpg">
        <img src="/uploads/photo.jpg">"#;

    let result = run(html, &SelectorConfig::default());
    assert_eq!(result.image_sources().collect::<Vec<_>>(), vec!["http://localhost/uploads/photo.jpg"]);
}
