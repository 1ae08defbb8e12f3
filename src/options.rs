//! Configuration options for document cleaning.
//!
//! The `Options` struct carries every rule table the cleaner consults.
//! All tables are data, so callers can extend or replace them without
//! touching the passes themselves.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::patterns::{
    BLOCK_TAGS, CONTAINS_PATTERNS, DROP_CAP_CLASSES, ENDS_WITH_PATTERNS, EQUALS_PATTERNS,
    FILTER_ATTRIBUTES, INLINE_TAGS, MEDIA_TAGS, NOISE_TAGS, PROTECTED_TAGS, RUN_INLINE_TAGS,
    STARTS_WITH_PATTERNS, WANTED_TAGS,
};
use crate::rules::{rules, AttributeRule, KeywordFilter, MatchMode};

/// Configuration options for document cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the stock tables.
///
/// # Example
///
/// ```rust
/// use rs_article_cleaner::{AttributeRule, Options};
///
/// let mut options = Options::default();
/// options.attribute_rules.push(AttributeRule::starts_with("promo-"));
///
/// let options = Options {
///     case_sensitive: false,
///     ..options
/// };
/// assert!(!options.case_sensitive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Structural tags removed together with their subtree.
    ///
    /// Default: `header, footer, nav, aside, form, button, input, meta`
    pub noise_tags: Vec<String>,

    /// Attributes whose tokens are checked against `attribute_rules`.
    ///
    /// Default: `id, class, name`
    pub filter_attributes: Vec<String>,

    /// Ordered attribute blacklist.
    ///
    /// Default: the starts-with, equals, ends-with and contains tables
    /// in [`crate::patterns`].
    pub attribute_rules: Vec<AttributeRule>,

    /// Second, independent blacklist with exceptions.
    pub keyword_filter: KeywordFilter,

    /// Compare tokens and patterns case-sensitively.
    ///
    /// Default: `true`
    pub case_sensitive: bool,

    /// Containers that lose offending attributes instead of being detached.
    ///
    /// Default: `html, head, body`
    pub protected_tags: Vec<String>,

    /// Class tokens marking drop-cap spans.
    ///
    /// Default: `dropcap, drop_cap`
    pub drop_cap_classes: Vec<String>,

    /// Inline formatting tags unwrapped into the text flow.
    ///
    /// Default: `em, strong, b, i, strike, del, ins`
    pub inline_tags: Vec<String>,

    /// Descendant tags that keep an inline formatting element intact.
    ///
    /// Default: `img`
    pub media_tags: Vec<String>,

    /// Alternate block tags converted to (or regrouped into) paragraphs.
    ///
    /// Default: `div, section, article`
    pub wanted_tags: Vec<String>,

    /// Descendant tags that stop a wanted tag from becoming a paragraph.
    ///
    /// Default: `a, blockquote, dl, div, img, ol, p, pre, table, ul`
    pub block_tags: Vec<String>,

    /// Inline elements that join adjacent text when paragraphs are built.
    pub run_inline_tags: Vec<String>,
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        let mut attribute_rules = rules(MatchMode::StartsWith, STARTS_WITH_PATTERNS);
        attribute_rules.extend(rules(MatchMode::Equals, EQUALS_PATTERNS));
        attribute_rules.extend(rules(MatchMode::EndsWith, ENDS_WITH_PATTERNS));
        attribute_rules.extend(rules(MatchMode::Contains, CONTAINS_PATTERNS));

        Self {
            noise_tags: strings(NOISE_TAGS),
            filter_attributes: strings(FILTER_ATTRIBUTES),
            attribute_rules,
            keyword_filter: KeywordFilter::default(),
            case_sensitive: true,
            protected_tags: strings(PROTECTED_TAGS),
            drop_cap_classes: strings(DROP_CAP_CLASSES),
            inline_tags: strings(INLINE_TAGS),
            media_tags: strings(MEDIA_TAGS),
            wanted_tags: strings(WANTED_TAGS),
            block_tags: strings(BLOCK_TAGS),
            run_inline_tags: strings(RUN_INLINE_TAGS),
        }
    }
}

impl Options {
    /// Load options from JSON. Missing fields keep their defaults.
    ///
    /// ```rust
    /// use rs_article_cleaner::Options;
    ///
    /// let options = Options::from_json(r#"{"noise_tags": ["nav"]}"#)?;
    /// assert_eq!(options.noise_tags, vec!["nav".to_string()]);
    /// assert!(options.case_sensitive);
    /// # Ok::<(), rs_article_cleaner::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
