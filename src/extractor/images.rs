//! Image candidate resolution.
//!
//! Pages hide the real image behind lazy-load attributes, responsive
//! `srcset`s, `<picture>` sources and wrapping links. The resolver walks
//! those in priority order, keeps the first usable URL, then rejects
//! placeholders, tracking pixels and avatar-sized thumbnails before the URL
//! is deduplicated against the run.

use dom_query::Selection;
use regex::Regex;

use crate::dom;
use crate::patterns::{
    AVATAR_CLASS, CDN_HEIGHT_PARAM, CDN_HEIGHT_TRANSFORM, CDN_SIZE_PAIR, CDN_SQUARE_PARAM,
    CDN_WIDTH_PARAM, CDN_WIDTH_TRANSFORM, PLACEHOLDER_IMAGE, TRACKING_IMAGE,
};
use crate::probe::RenderProbe;
use crate::selector::utils;
use crate::url_utils::{create_absolute_url, extract_filename, is_image_url, normalize_image_url};

use super::context::ExtractionContext;

/// Lazy-load attributes, highest priority first.
pub static LAZY_SRC_ATTRIBUTES: [&str; 5] = ["data-src", "data-lazy-src", "data-original", "data-lazy", "data-full-src"];

/// Score of a density descriptor is its value times this factor.
const DENSITY_SCALE: f64 = 1000.0;

/// One parsed `srcset` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SrcsetCandidate {
    /// Candidate URL as written.
    pub url: String,
    /// Width descriptor, or density descriptor scaled by 1000.
    pub score: f64,
}

/// Parse a `srcset` attribute.
///
/// URLs run up to the next whitespace, so commas inside a URL (Cloudinary
/// transforms) are kept. A missing descriptor counts as `1x`; an unknown
/// one scores zero. `data:` URLs are skipped.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::extractor::images::parse_srcset;
///
/// let candidates = parse_srcset("a.jpg 480w, b.jpg 2x, c.jpg");
/// let scores: Vec<f64> = candidates.iter().map(|c| c.score).collect();
/// assert_eq!(scores, vec![480.0, 2000.0, 1000.0]);
/// ```
#[must_use]
pub fn parse_srcset(srcset: &str) -> Vec<SrcsetCandidate> {
    let mut candidates = Vec::new();
    let mut rest = srcset;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }

        let url_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let raw_url = &rest[..url_end];
        rest = &rest[url_end..];

        let (url, descriptor) = if raw_url.ends_with(',') {
            (raw_url.trim_end_matches(','), "")
        } else {
            let descriptor_end = rest.find(',').unwrap_or(rest.len());
            let descriptor = rest[..descriptor_end].trim();
            rest = &rest[descriptor_end..];
            (raw_url, descriptor)
        };

        if url.is_empty() || url.starts_with("data:") {
            continue;
        }

        candidates.push(SrcsetCandidate {
            url: url.to_string(),
            score: descriptor_score(descriptor),
        });
    }

    candidates
}

fn descriptor_score(descriptor: &str) -> f64 {
    if descriptor.is_empty() {
        return DENSITY_SCALE;
    }
    // Only the first descriptor counts (`480w 2x` is malformed anyway).
    let first = descriptor.split_whitespace().next().unwrap_or_default();
    if let Some(width) = first.strip_suffix(['w', 'W']) {
        return width.parse::<f64>().unwrap_or(0.0);
    }
    if let Some(density) = first.strip_suffix(['x', 'X']) {
        return density.parse::<f64>().map_or(0.0, |d| d * DENSITY_SCALE);
    }
    0.0
}

/// Highest-scoring URL across the given candidates. Ties keep the first.
#[must_use]
pub fn best_srcset_candidate(candidates: &[SrcsetCandidate]) -> Option<&SrcsetCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

/// Check whether a URL is a lazy-load placeholder.
///
/// Short `data:` URLs are inline placeholders; long ones are real inline
/// images.
#[must_use]
pub fn is_placeholder_url(url: &str, min_data_url_len: usize) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return true;
    }
    if url.starts_with("data:") {
        return url.len() < min_data_url_len;
    }
    PLACEHOLDER_IMAGE.is_match(url)
}

/// Check whether an image is a 1×1/0×0 pixel or a spacer/tracker file.
#[must_use]
pub fn is_tracking_pixel_or_spacer(img: &Selection, url: &str, probe: &dyn RenderProbe) -> bool {
    if let Some((width, height)) = probe.natural_size(img) {
        if width <= 1 && height <= 1 {
            return true;
        }
    }
    TRACKING_IMAGE.is_match(&extract_filename(url))
}

/// Width and height requested by a CDN resize directive in the URL.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::extractor::images::cdn_dimensions;
///
/// assert_eq!(cdn_dimensions("https://x.com/photo-150x150.jpg"), (Some(150), Some(150)));
/// assert_eq!(cdn_dimensions("https://x.com/a.jpg?w=64"), (Some(64), None));
/// assert_eq!(cdn_dimensions("https://gravatar.com/avatar/abc?s=48"), (Some(48), Some(48)));
/// assert_eq!(cdn_dimensions("https://x.com/a.jpg"), (None, None));
/// ```
#[must_use]
pub fn cdn_dimensions(url: &str) -> (Option<u32>, Option<u32>) {
    if let Some(caps) = CDN_SIZE_PAIR.captures(url) {
        return (caps[1].parse().ok(), caps[2].parse().ok());
    }
    if let Some(caps) = CDN_SQUARE_PARAM.captures(url) {
        let side = caps[1].parse().ok();
        return (side, side);
    }

    (
        first_capture(url, &[&*CDN_WIDTH_PARAM, &*CDN_WIDTH_TRANSFORM]),
        first_capture(url, &[&*CDN_HEIGHT_PARAM, &*CDN_HEIGHT_TRANSFORM]),
    )
}

fn first_capture(url: &str, patterns: &[&Regex]) -> Option<u32> {
    patterns
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps[1].parse().ok())
}

/// Small when every known dimension is below `min_size`.
fn below(min_size: u32, dims: (Option<u32>, Option<u32>)) -> bool {
    match dims {
        (Some(w), Some(h)) => w < min_size && h < min_size,
        (Some(side), None) | (None, Some(side)) => side < min_size,
        (None, None) => false,
    }
}

/// Check whether an image is a thumbnail-sized or avatar image.
#[must_use]
pub fn is_small_or_avatar_image(img: &Selection, url: &str, probe: &dyn RenderProbe, min_size: u32) -> bool {
    if AVATAR_CLASS.is_match(&utils::class(img)) {
        return true;
    }
    if below(min_size, cdn_dimensions(url)) {
        return true;
    }
    probe
        .natural_size(img)
        .is_some_and(|(w, h)| below(min_size, (Some(w), Some(h))))
}

/// Pick the best raw URL for an image, before post-filtering.
///
/// `container` is the element the image belongs to (a `<figure>` or
/// `<picture>`); it defaults to the image itself.
#[must_use]
pub fn extract_best_image_url(
    img: &Selection,
    container: Option<&Selection>,
    ctx: &ExtractionContext,
) -> Option<String> {
    let min_data = ctx.options.min_data_url_len;
    let container = container.unwrap_or(img);

    if let Some(current) = ctx.probe.current_src(img) {
        if !is_placeholder_url(&current, min_data) {
            return Some(current);
        }
    }

    if let Some(href) = linked_image_href(container, &ctx.options.image_hosts) {
        return Some(href);
    }

    if let Some(src) = dom::non_empty_attribute(img, "src") {
        if !is_placeholder_url(&src, min_data) {
            return Some(src);
        }
    }

    if let Some(srcset) = dom::non_empty_attribute(img, "srcset") {
        if let Some(best) = best_srcset_candidate(&parse_srcset(&srcset)) {
            return Some(best.url.clone());
        }
    }

    let sources = picture_sources(img, container);
    if let Some(best) = best_srcset_candidate(&sources) {
        return Some(best.url.clone());
    }

    LAZY_SRC_ATTRIBUTES
        .iter()
        .filter_map(|attr| dom::non_empty_attribute(img, attr))
        .find(|value| !value.starts_with("data:"))
}

/// `href` of the nearest wrapping link, else the first link inside the
/// container, when it points at an image.
fn linked_image_href(container: &Selection, image_hosts: &[String]) -> Option<String> {
    let wrapping = dom::closest_tag(container, "a");
    let inner = container.select("a[href]").nodes().first().map(|node| Selection::from(*node));

    wrapping
        .into_iter()
        .chain(inner)
        .filter_map(|link| dom::non_empty_attribute(&link, "href"))
        .find(|href| is_image_url(href, image_hosts))
}

/// `srcset` candidates of the `<source>` children of the enclosing
/// `<picture>` and of the container.
fn picture_sources(img: &Selection, container: &Selection) -> Vec<SrcsetCandidate> {
    let picture = if dom::is_one_of(img, &["picture"]) {
        Some(img.clone())
    } else {
        dom::closest_tag(img, "picture")
    };

    let mut parents = Vec::with_capacity(2);
    parents.extend(picture);
    if !parents.iter().any(|p| dom::same_node(p, container)) {
        parents.push(container.clone());
    }

    parents
        .iter()
        .flat_map(dom::element_children)
        .filter(|child| dom::is_one_of(child, &["source"]))
        .filter_map(|source| dom::non_empty_attribute(&source, "srcset"))
        .flat_map(|srcset| parse_srcset(&srcset))
        .collect()
}

/// Resolve, filter and deduplicate an image.
///
/// Returns the absolute URL when the image should be emitted; the URL is
/// then recorded in the run so the same file is never emitted twice.
pub fn resolve_image(img: &Selection, container: Option<&Selection>, ctx: &mut ExtractionContext) -> Option<String> {
    let Some(url) = extract_best_image_url(img, container, ctx) else {
        log::trace!("image without usable source skipped");
        return None;
    };

    if is_placeholder_url(&url, ctx.options.min_data_url_len) {
        log::trace!("placeholder image skipped: {url}");
        return None;
    }
    if is_tracking_pixel_or_spacer(img, &url, ctx.probe) {
        log::trace!("tracking pixel skipped: {url}");
        return None;
    }
    if is_small_or_avatar_image(img, &url, ctx.probe, ctx.options.min_image_size) {
        log::trace!("small or avatar image skipped: {url}");
        return None;
    }

    let absolute = create_absolute_url(&url, &ctx.base_url);
    let normalized = normalize_image_url(&absolute, &ctx.base_url);
    if !ctx.register_image(normalized) {
        log::trace!("duplicate image skipped: {absolute}");
        return None;
    }

    Some(absolute)
}
