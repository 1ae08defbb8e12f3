//! Error types for rs-article-cleaner.
//!
//! Cleaning itself never fails on a parsed tree. Errors only come from
//! contract violations at the entry points and from rule table validation.

/// Error type for cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `clean` was called on an article that holds no document.
    #[error("article has no document to clean")]
    MissingDocument,

    /// A rule table entry cannot be used (empty pattern or tag name).
    #[error("invalid cleaning rule: {0}")]
    InvalidRule(String),

    /// Rule tables could not be deserialized.
    #[error("invalid cleaner configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
