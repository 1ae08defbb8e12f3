//! # rs-article-cleaner
//!
//! In-place HTML document cleaning for article extraction pipelines.
//!
//! The cleaner strips comments, scripts, structural chrome and blacklisted
//! elements from a parsed page, flattens inline formatting, and normalizes
//! loose text into paragraphs so a downstream scorer sees clean blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_article_cleaner::clean_html;
//!
//! let html = r#"<html><body>
//! <header>Site</header>
//! <div>Hello <em>world</em></div>
//! <span class="caption">Photo</span>
//! </body></html>"#;
//!
//! let cleaned = clean_html(html);
//! assert!(cleaned.contains("<p>Hello world </p>"));
//! assert!(!cleaned.contains("header"));
//! assert!(!cleaned.contains("caption"));
//! ```
//!
//! ## Passes
//!
//! - **Removal**: comments, `script`/`style`, structural noise tags
//! - **Filtering**: `id`/`class`/`name` blacklist, keyword filter with exceptions
//! - **Flattening**: drop caps, inline formatting tags, spans inside paragraphs
//! - **Normalization**: `div`/`section`/`article` into paragraphs
//!
//! Every table is configurable through [`Options`].

mod article;
mod error;
mod options;
mod result;
mod rules;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Default rule and tag tables.
pub mod patterns;

/// The cleaning pipeline and its passes.
pub mod cleaner;

use std::sync::LazyLock;

// Public API - re-exports
pub use article::{Article, Metadata};
pub use cleaner::Cleaner;
pub use error::{Error, Result};
pub use options::Options;
pub use result::CleanStats;
pub use rules::{AttributeRule, KeywordFilter, MatchMode};

static DEFAULT_CLEANER: LazyLock<Cleaner> = LazyLock::new(Cleaner::default);

/// Cleans a parsed document in place using default options.
///
/// # Example
///
/// ```rust
/// use rs_article_cleaner::{clean, dom};
///
/// let doc = dom::parse("<body><!-- ad slot --><script>track()</script><p>Text</p></body>");
/// let stats = clean(&doc);
///
/// assert_eq!(stats.comments, 1);
/// assert_eq!(stats.scripts, 1);
/// assert_eq!(dom::body_html(&doc), "<body><p>Text</p></body>");
/// ```
pub fn clean(doc: &dom::Document) -> CleanStats {
    DEFAULT_CLEANER.clean_document(doc)
}

/// Parses `html`, cleans it with default options and serializes the result.
///
/// # Example
///
/// ```rust
/// use rs_article_cleaner::clean_html;
///
/// let cleaned = clean_html("<p><span>Example</span> <span>Tags</span></p>");
/// assert!(cleaned.contains("<p>Example Tags</p>"));
/// ```
#[must_use]
pub fn clean_html(html: &str) -> String {
    let doc = dom::parse(html);
    DEFAULT_CLEANER.clean_document(&doc);
    dom::document_html(&doc).to_string()
}

/// Parses `html`, cleans it with custom options and serializes the result.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `options` - Rule tables for the cleaner
///
/// # Returns
///
/// Returns an `Error` only when `options` fail validation.
///
/// # Example
///
/// ```rust
/// use rs_article_cleaner::{clean_html_with_options, Options};
///
/// let options = Options {
///     noise_tags: vec!["nav".to_string()],
///     ..Options::default()
/// };
/// let cleaned = clean_html_with_options("<nav>menu</nav><footer>kept</footer>", &options)?;
/// assert!(cleaned.contains("<footer>kept</footer>"));
/// # Ok::<(), rs_article_cleaner::Error>(())
/// ```
pub fn clean_html_with_options(html: &str, options: &Options) -> Result<String> {
    let cleaner = Cleaner::new(options.clone())?;
    let doc = dom::parse(html);
    cleaner.clean_document(&doc);
    Ok(dom::document_html(&doc).to_string())
}
