//! Selector Infrastructure
//!
//! Soft-fail CSS selector matching. Selectors come from an external discovery
//! step and may be malformed; compiling one yields a `Result`, and the sets
//! built from them simply leave invalid entries out so a bad selector behaves
//! as "matches nothing".

use dom_query::{Matcher, Selection};

use crate::dom;
use crate::error::{Error, Result};

pub mod utils;

/// A parsed CSS selector together with its source text.
pub struct CompiledSelector {
    source: String,
    matcher: Matcher,
}

impl std::fmt::Debug for CompiledSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSelector")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Parse a selector.
///
/// # Example
///
/// ```rust
/// use rs_docblocks::selector;
///
/// assert!(selector::compile("div.content > p").is_ok());
/// assert!(selector::compile("div[[").is_err());
/// ```
pub fn compile(selector: &str) -> Result<CompiledSelector> {
    let source = selector.trim();
    if source.is_empty() {
        return Err(Error::InvalidSelector {
            selector: selector.to_string(),
            reason: "empty selector".to_string(),
        });
    }

    match Matcher::new(source) {
        Ok(matcher) => Ok(CompiledSelector {
            source: source.to_string(),
            matcher,
        }),
        Err(err) => Err(Error::InvalidSelector {
            selector: source.to_string(),
            reason: format!("{err:?}"),
        }),
    }
}

impl CompiledSelector {
    /// Selector text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check whether the element itself matches.
    #[must_use]
    pub fn matches(&self, sel: &Selection) -> bool {
        sel.is_matcher(&self.matcher)
    }

    /// Check whether the element or any of its ancestors matches.
    #[must_use]
    pub fn matches_self_or_ancestor(&self, sel: &Selection) -> bool {
        self.matches(sel) || dom::ancestors(sel).iter().any(|anc| self.matches(anc))
    }

    /// All matching descendants of `root`, in document order.
    #[must_use]
    pub fn select_all<'a>(&self, root: &Selection<'a>) -> Vec<Selection<'a>> {
        root.select_matcher(&self.matcher)
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .collect()
    }
}

/// A list of selectors compiled once per run.
#[derive(Debug, Default)]
pub struct SelectorSet {
    selectors: Vec<CompiledSelector>,
    invalid: Vec<String>,
}

impl SelectorSet {
    /// Compile every selector, keeping the valid ones.
    ///
    /// Blank entries are ignored; malformed ones are logged and remembered
    /// in [`SelectorSet::invalid`].
    #[must_use]
    pub fn compile_all<S: AsRef<str>>(selectors: &[S]) -> Self {
        let mut set = Self::default();
        for raw in selectors {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }
            match compile(raw) {
                Ok(compiled) => set.selectors.push(compiled),
                Err(err) => {
                    log::warn!("ignoring exclude selector: {err}");
                    set.invalid.push(raw.trim().to_string());
                }
            }
        }
        set
    }

    /// Number of valid selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// True when no valid selector was compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Selectors that failed to compile.
    #[must_use]
    pub fn invalid(&self) -> &[String] {
        &self.invalid
    }

    /// Check whether the element or an ancestor matches any selector.
    #[must_use]
    pub fn matches_self_or_ancestor(&self, sel: &Selection) -> bool {
        self.selectors
            .iter()
            .any(|compiled| compiled.matches_self_or_ancestor(sel))
    }

    /// Remove every descendant of `root` matching any selector.
    ///
    /// Only ever called on private fragment copies, never on the input
    /// document.
    pub fn remove_matches(&self, root: &Selection) {
        for compiled in &self.selectors {
            root.select_matcher(&compiled.matcher).remove();
        }
    }
}
