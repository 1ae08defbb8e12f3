//! Default rule tables for document cleaning.
//!
//! These are the stock tables used by [`Options::default`](crate::Options).
//! Callers override them through `Options` rather than editing these lists.

use std::collections::HashSet;
use std::sync::LazyLock;

// =============================================================================
// Tag Tables
// =============================================================================

/// Elements removed with their subtree before any attribute is inspected.
pub static SCRIPT_TAGS: &[&str] = &["script", "style"];

/// `SCRIPT_TAGS` as a `HashSet`
pub static SCRIPT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SCRIPT_TAGS.iter().copied().collect());

/// Structural and interactive chrome removed as a unit.
pub static NOISE_TAGS: &[&str] = &[
    "header", "footer", "nav", "aside", "form", "button", "input", "meta",
];

/// Inline formatting tags unwrapped into the surrounding text flow.
pub static INLINE_TAGS: &[&str] = &["em", "strong", "b", "i", "strike", "del", "ins"];

/// Descendants that keep an inline formatting element intact.
pub static MEDIA_TAGS: &[&str] = &["img"];

/// Class tokens marking drop-cap spans.
pub static DROP_CAP_CLASSES: &[&str] = &["dropcap", "drop_cap"];

/// Alternate block tags converted to paragraphs.
pub static WANTED_TAGS: &[&str] = &["div", "section", "article"];

/// Descendants that stop a wanted tag from being renamed to `p`.
pub static BLOCK_TAGS: &[&str] = &[
    "a", "blockquote", "dl", "div", "img", "ol", "p", "pre", "table", "ul",
];

/// Inline elements that join an adjacent text run when paragraphs are built.
pub static RUN_INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "cite", "code", "em", "i", "mark", "q", "small", "span", "strong",
    "sub", "sup", "u",
];

/// Containers never detached by attribute filters.
pub static PROTECTED_TAGS: &[&str] = &["html", "head", "body"];

// =============================================================================
// Attribute Blacklist
// =============================================================================

/// Attributes whose tokens are checked against the attribute blacklist.
pub static FILTER_ATTRIBUTES: &[&str] = &["id", "class", "name"];

/// Token prefixes marking ads and share widgets.
pub static STARTS_WITH_PATTERNS: &[&str] = &[
    "adspot", "conditionalAd-", "hidden-", "social-", "publication", "share-", "hp-", "ad-",
    "recommended-",
];

/// Tokens that are noise only as a whole word.
pub static EQUALS_PATTERNS: &[&str] = &["side", "links", "inset", "print", "fn", "ad"];

/// Token suffixes marking metadata blocks.
pub static ENDS_WITH_PATTERNS: &[&str] = &["meta"];

/// Substrings marking navigation, comments, bylines and site furniture.
pub static CONTAINS_PATTERNS: &[&str] = &[
    "combx", "retweet", "mediaarticlerelated", "menucontainer", "navbar", "storytopbar-bucket",
    "utility-bar", "inline-share-tools", "comment", "PopularQuestions", "contact", "foot",
    "cnn_strycaptiontxt", "cnn_html_slideshow", "cnn_strylftcntnt", "shoutbox", "sponsor",
    "tags", "socialnetworking", "socialNetworking", "cnnStryHghLght", "cnn_stryspcvbx",
    "pagetools", "post-attributes", "welcome_form", "contentTools2", "the_answers",
    "communitypromo", "runaroundLeft", "subscribe", "vcard", "articleheadings", "date",
    "popup", "author", "tools", "byline", "konafilter", "KonaFilter", "breadcrumbs",
    "wp-caption-text", "legende", "ajoutVideo", "timestamp", "js_replies", "scroll", "rating",
];

// =============================================================================
// Keyword Filter
// =============================================================================

/// Attributes inspected by the keyword filter.
pub static KEYWORD_ATTRIBUTES: &[&str] = &["class", "id"];

/// Whole-token keywords.
pub static KEYWORD_EQUALS: &[&str] = &[
    "caption", "google", "facebook", "twitter", "facebook-broadcasting",
];

/// Keywords matched anywhere inside a token.
pub static KEYWORD_CONTAINS: &[&str] = &["more"];

/// Full attribute values exempt from the keyword filter.
pub static KEYWORD_EXCEPTIONS: &[&str] = &["entry-more"];
