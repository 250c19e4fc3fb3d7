use rs_docblocks::{extract, extract_with_options, ContentBlock, Error, Options, SelectorConfig};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.base_url.is_none());
    assert!(options.title.is_none());
    assert!(options.author.is_none());
    assert_eq!(options.min_image_size, 100);
    assert_eq!(options.footnotes_heading, "Footnotes");
    assert!(options.image_hosts.iter().any(|h| h == "cloudinary.com"));
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        min_image_size: 40,
        base_url: Some("https://example.com/article".to_string()),
        ..Options::default()
    };

    assert_eq!(options.min_image_size, 40);
    assert_eq!(options.byline_max_chars, 50);
    assert_eq!(options.base_url.as_deref(), Some("https://example.com/article"));
}

#[test]
fn selector_config_from_discovery_json() {
    let json = r##"{
        "content": "div.entry-content",
        "articleContainer": "article",
        "exclude": [".share-buttons", "#comments"]
    }"##;
    let config: SelectorConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.content.as_deref(), Some("div.entry-content"));
    assert_eq!(config.article_container.as_deref(), Some("article"));
    assert_eq!(config.exclude, vec![".share-buttons", "#comments"]);

    let round = serde_json::to_value(&config).unwrap();
    assert_eq!(round["articleContainer"], "article");
}

#[test]
fn relative_base_url_is_rejected() {
    let options = Options {
        base_url: Some("blog/post".to_string()),
        ..Options::default()
    };

    let err = extract_with_options("<p>x</p>", &SelectorConfig::default(), &options).unwrap_err();
    assert_eq!(err, Error::InvalidBaseUrl("blog/post".to_string()));
}

#[test]
fn blank_base_url_treated_as_unset() {
    let options = Options {
        base_url: Some("   ".to_string()),
        ..Options::default()
    };

    let result = extract_with_options(r#"<img src="a.jpg">"#, &SelectorConfig::default(), &options).unwrap();
    assert_eq!(result.image_sources().collect::<Vec<_>>(), vec!["http://localhost/a.jpg"]);
}

#[test]
fn min_image_size_threshold_is_configurable() {
    let html = r#"<img src="/thumb.jpg" width="64" height="64">"#;

    let default = extract(html, &SelectorConfig::default()).unwrap();
    assert_eq!(default.image_sources().count(), 0);

    let options = Options {
        min_image_size: 32,
        ..Options::default()
    };
    let lowered = extract_with_options(html, &SelectorConfig::default(), &options).unwrap();
    assert_eq!(lowered.image_sources().count(), 1);
}

#[test]
fn custom_footnotes_heading_text() {
    let html = r#"<p>Body</p><div id="footnotes"><ol><li id="fn1">Note</li></ol></div>"#;
    let options = Options {
        footnotes_heading: "Notes".to_string(),
        ..Options::default()
    };

    let result = extract_with_options(html, &SelectorConfig::default(), &options).unwrap();
    assert!(result.blocks.contains(&ContentBlock::Heading {
        level: 2,
        text: "Notes".to_string(),
        id: "footnotes-section".to_string(),
    }));
    assert_eq!(result.diagnostics.heading_count, 0);
}

#[test]
fn custom_image_hosts_recognize_linked_originals() {
    let html = r#"<figure><a href="https://media.example.org/full/12345"><img src="/thumb-800.jpg" alt="x"></a></figure>"#;

    let default = extract(html, &SelectorConfig::default()).unwrap();
    assert_eq!(default.image_sources().collect::<Vec<_>>(), vec!["http://localhost/thumb-800.jpg"]);

    let options = Options {
        image_hosts: vec!["media.example.org".to_string()],
        ..Options::default()
    };
    let result = extract_with_options(html, &SelectorConfig::default(), &options).unwrap();
    assert_eq!(result.image_sources().collect::<Vec<_>>(), vec!["https://media.example.org/full/12345"]);
}
