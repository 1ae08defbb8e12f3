//! The document cleaning pipeline.
//!
//! [`Cleaner`] runs eight passes over a parsed document, in place:
//!
//! 1. comments
//! 2. `script` / `style`
//! 3. structural noise (`header`, `footer`, `nav`, ...)
//! 4. attribute blacklist on `id` / `class` / `name` tokens
//! 5. keyword filter with exceptions
//! 6. drop caps
//! 7. inline formatting tags, then spans inside paragraphs
//! 8. wanted containers to paragraphs
//!
//! All removals run before the restructuring passes.

mod filters;
mod inline;
mod paragraphs;
mod strip;

use std::collections::HashSet;

use tracing::debug;

use crate::article::Article;
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::CleanStats;

/// Reusable document cleaner.
///
/// Construction validates the rule tables once; cleaning itself cannot fail.
///
/// # Example
///
/// ```rust
/// use rs_article_cleaner::{dom, Cleaner};
///
/// let doc = dom::parse("<div>Hello <b>world</b></div>");
/// let stats = Cleaner::default().clean_document(&doc);
///
/// assert_eq!(dom::body_html(&doc), "<body><p>Hello world </p></body>");
/// assert_eq!(stats.paragraphs_renamed, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cleaner {
    options: Options,
    noise_tags: HashSet<String>,
    protected_tags: HashSet<String>,
    drop_cap_classes: HashSet<String>,
    inline_tags: HashSet<String>,
    media_tags: HashSet<String>,
    pub(crate) wanted_tags: HashSet<String>,
    pub(crate) block_tags: HashSet<String>,
    pub(crate) run_inline_tags: HashSet<String>,
}

fn tag_set(tags: &[String]) -> HashSet<String> {
    tags.iter().map(|t| t.trim().to_ascii_lowercase()).collect()
}

fn check_names(field: &str, names: &[String]) -> Result<()> {
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(Error::InvalidRule(format!("empty entry in {field}")));
    }
    Ok(())
}

impl Cleaner {
    /// Build a cleaner, rejecting empty patterns and empty tag names.
    pub fn new(options: Options) -> Result<Self> {
        for rule in &options.attribute_rules {
            rule.validate()?;
        }
        options.keyword_filter.validate()?;

        check_names("noise_tags", &options.noise_tags)?;
        check_names("filter_attributes", &options.filter_attributes)?;
        check_names("protected_tags", &options.protected_tags)?;
        check_names("drop_cap_classes", &options.drop_cap_classes)?;
        check_names("inline_tags", &options.inline_tags)?;
        check_names("media_tags", &options.media_tags)?;
        check_names("wanted_tags", &options.wanted_tags)?;
        check_names("block_tags", &options.block_tags)?;
        check_names("run_inline_tags", &options.run_inline_tags)?;

        Ok(Self::build(options))
    }

    fn build(options: Options) -> Self {
        Self {
            noise_tags: tag_set(&options.noise_tags),
            protected_tags: tag_set(&options.protected_tags),
            // Class tokens are case-sensitive in HTML.
            drop_cap_classes: options.drop_cap_classes.iter().cloned().collect(),
            inline_tags: tag_set(&options.inline_tags),
            media_tags: tag_set(&options.media_tags),
            wanted_tags: tag_set(&options.wanted_tags),
            block_tags: tag_set(&options.block_tags),
            run_inline_tags: tag_set(&options.run_inline_tags),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn is_protected(&self, tag: &str) -> bool {
        self.protected_tags.contains(tag)
    }

    /// Clean the article's document in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDocument`] if the article has no document.
    pub fn clean(&self, article: &mut Article) -> Result<CleanStats> {
        let doc = article.doc.as_ref().ok_or(Error::MissingDocument)?;
        Ok(self.clean_document(doc))
    }

    /// Run every pass over `doc`, in place.
    pub fn clean_document(&self, doc: &Document) -> CleanStats {
        let root = doc.root();
        let mut stats = CleanStats::default();

        stats.comments = strip::remove_comments(&root);
        debug!(removed = stats.comments, "comments stripped");

        stats.scripts = strip::remove_scripts(&root);
        debug!(removed = stats.scripts, "scripts and styles stripped");

        stats.noise = strip::remove_noise(&root, &self.noise_tags);
        debug!(removed = stats.noise, "structural noise stripped");

        let attrs = filters::apply_attribute_rules(&root, self);
        stats.attribute_filtered = attrs.removed;
        debug!(
            removed = attrs.removed,
            dropped = attrs.dropped,
            "attribute blacklist applied"
        );

        let keywords = filters::apply_keyword_filter(&root, self);
        stats.keyword_filtered = keywords.removed;
        stats.attributes_dropped = attrs.dropped + keywords.dropped;
        debug!(
            removed = keywords.removed,
            dropped = keywords.dropped,
            "keyword filter applied"
        );

        stats.drop_caps = inline::replace_drop_caps(&root, &self.drop_cap_classes);
        debug!(replaced = stats.drop_caps, "drop caps flattened");

        stats.inline_unwrapped =
            inline::unwrap_inline_tags(&root, &self.inline_tags, &self.media_tags);
        stats.spans_unwrapped = inline::unwrap_paragraph_spans(&root, false);
        debug!(
            inline = stats.inline_unwrapped,
            spans = stats.spans_unwrapped,
            "inline tags unwrapped"
        );

        let paras = paragraphs::normalize_paragraphs(&root, self);
        stats.paragraphs_renamed = paras.renamed;
        stats.paragraphs_created = paras.created;
        stats.spans_unwrapped += paras.spans;
        debug!(
            renamed = paras.renamed,
            created = paras.created,
            "paragraphs normalized"
        );

        stats
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::build(Options::default())
    }
}
