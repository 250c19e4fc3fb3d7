//! Cleaned HTML fragments.
//!
//! Paragraphs, quotes, list items and table cells keep their inline markup.
//! The markup is taken from a private copy of the element with exclude
//! matches and script-like tags removed and links made absolute.

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::patterns::WHITESPACE_NORMALIZE;
use crate::selector::SelectorSet;
use crate::url_utils::create_absolute_url;

/// Tags never carried into a fragment.
const STRIPPED_TAGS: &str = "script, style, noscript, template";

/// Inner HTML of a cleaned element plus its plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Cleaned inner HTML, trimmed.
    pub html: String,
    /// Plain text with whitespace collapsed.
    pub text: String,
}

impl Fragment {
    /// True when nothing but whitespace survived cleaning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Build a cleaned fragment from an element's children.
///
/// The input document is never modified.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::dom;
/// use rs_docblocks::extractor::fragment::clean_fragment;
/// use rs_docblocks::selector::SelectorSet;
/// use url::Url;
///
/// let doc = dom::parse(r#"<p>Read <a href="/more">more</a><span class="ad">buy</span></p>"#);
/// let base = Url::parse("https://example.com/post/").unwrap();
/// let excludes = SelectorSet::compile_all(&[".ad"]);
///
/// let fragment = clean_fragment(&doc.select("p"), &excludes, &base);
/// assert_eq!(fragment.html, r#"Read <a href="https://example.com/more">more</a>"#);
/// assert_eq!(fragment.text, "Read more");
/// ```
#[must_use]
pub fn clean_fragment(element: &Selection, excludes: &SelectorSet, base: &Url) -> Fragment {
    let copy = dom::clone_inner(element);
    let body = copy.select("body");

    dom::remove(&body.select(STRIPPED_TAGS));
    excludes.remove_matches(&body);
    absolutize(&body, base);

    let html = dom::inner_html(&body).trim().to_string();
    let text = WHITESPACE_NORMALIZE
        .replace_all(&dom::text_content(&body), " ")
        .trim()
        .to_string();

    Fragment { html, text }
}

/// Rewrite `a[href]` and `img[src]` to absolute URLs.
///
/// In-document links (`#id`) are kept as they are.
fn absolutize(root: &Selection, base: &Url) {
    for (selector, attr) in [("a[href]", "href"), ("img[src]", "src")] {
        for node in root.select(selector).nodes() {
            let sel = Selection::from(*node);
            let Some(value) = sel.attr(attr) else {
                continue;
            };
            let absolute = create_absolute_url(&value, base);
            if absolute.as_str() != &*value {
                dom::set_attribute(&sel, attr, &absolute);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post.html").unwrap()
    }

    fn clean(html: &str, selector: &str, excludes: &[&str]) -> Fragment {
        let doc = dom::parse(html);
        clean_fragment(&doc.select(selector), &SelectorSet::compile_all(excludes), &base())
    }

    #[test]
    fn test_fragment_links_keep_hash_targets() {
        let fragment = clean(r##"<p>Hello <a href="#s1">there</a></p>"##, "p", &[]);
        assert_eq!(fragment.html, r##"Hello <a href="#s1">there</a>"##);
    }

    #[test]
    fn test_fragment_absolutizes_relative_links_and_images() {
        let fragment = clean(r#"<p><a href="next.html">n</a><img src="../img/a.png"></p>"#, "p", &[]);

        assert!(fragment.html.contains(r#"href="https://example.com/blog/next.html""#));
        assert!(fragment.html.contains(r#"src="https://example.com/img/a.png""#));
    }

    #[test]
    fn test_fragment_strips_excluded_and_script() {
        let fragment = clean(
            r#"<p>Text<script>var x;</script><span class="share">Share</span></p>"#,
            "p",
            &[".share"],
        );

        assert_eq!(fragment.html, "Text");
        assert_eq!(fragment.text, "Text");
    }

    #[test]
    fn test_fragment_input_untouched() {
        let doc = dom::parse(r#"<p><a href="/x">x</a><span class="ad">y</span></p>"#);
        let p = doc.select("p");
        let _ = clean_fragment(&p, &SelectorSet::compile_all(&[".ad"]), &base());

        assert_eq!(p.select("a").attr("href").as_deref(), Some("/x"));
        assert_eq!(p.select(".ad").length(), 1);
    }

    #[test]
    fn test_whitespace_only_fragment_is_empty() {
        let fragment = clean("<li>  \n </li>", "li", &[]);
        assert!(fragment.is_empty());
        assert!(fragment.text.is_empty());
    }
}
