//! Error types for rs-docblocks.
//!
//! Extraction is best-effort: most of these errors are produced by soft-fail
//! helpers and degraded at the call site rather than returned from a run.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A CSS selector could not be parsed.
    ///
    /// Selector errors never abort a run; the selector is treated as
    /// matching nothing.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The selector text as supplied.
        selector: String,
        /// Short description of the parse failure.
        reason: String,
    },

    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A computed-style query failed. The element is treated as visible.
    #[error("style query failed: {0}")]
    StyleQuery(String),

    /// No content blocks were extracted.
    ///
    /// Only returned by [`crate::ExtractResult::require_content`].
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
