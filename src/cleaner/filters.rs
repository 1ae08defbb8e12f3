//! Attribute blacklist and keyword filter passes.
//!
//! Both walk the tree once and detach offending elements with their
//! subtree. Protected containers are never detached; they lose the
//! offending attribute instead.

use tracing::trace;

use super::Cleaner;
use crate::dom::{self, NodeRef};
use crate::rules::first_token_match;

/// Outcome of a filter pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilterOutcome {
    /// Elements detached.
    pub removed: usize,
    /// Attributes dropped from protected containers.
    pub dropped: usize,
}

/// Detach elements whose `id`/`class`/`name` tokens hit the attribute blacklist.
pub(crate) fn apply_attribute_rules(root: &NodeRef, cleaner: &Cleaner) -> FilterOutcome {
    let opts = cleaner.options();
    let mut dropped = 0;

    let removed = dom::prune(root, &mut |node| {
        let Some(tag) = dom::tag_name(node) else {
            return false;
        };

        let hits: Vec<(&String, String)> = opts
            .filter_attributes
            .iter()
            .filter_map(|attr| {
                let value = dom::get_attribute(node, attr)?;
                let (rule, token) =
                    first_token_match(&value, &opts.attribute_rules, opts.case_sensitive)?;
                trace!(
                    tag = %tag,
                    attr = %attr,
                    token = %token,
                    mode = ?rule.mode,
                    pattern = %rule.pattern,
                    "attribute rule matched"
                );
                Some((attr, token))
            })
            .collect();

        if hits.is_empty() {
            return false;
        }
        if cleaner.is_protected(&tag) {
            for (attr, _) in hits {
                dom::remove_attribute(node, attr);
                dropped += 1;
            }
            return false;
        }
        true
    });

    FilterOutcome { removed, dropped }
}

/// Detach elements whose class/id tokens hit a keyword, unless allow-listed.
pub(crate) fn apply_keyword_filter(root: &NodeRef, cleaner: &Cleaner) -> FilterOutcome {
    let opts = cleaner.options();
    let filter = &opts.keyword_filter;
    let mut dropped = 0;

    let removed = dom::prune(root, &mut |node| {
        let Some(tag) = dom::tag_name(node) else {
            return false;
        };

        let values: Vec<(String, String)> = filter
            .attributes
            .iter()
            .filter_map(|attr| dom::get_attribute(node, attr).map(|v| (attr.clone(), v)))
            .collect();
        if values.is_empty() {
            return false;
        }

        let Some((attr, token)) = filter.offending(&values, opts.case_sensitive) else {
            return false;
        };
        trace!(tag = %tag, attr = %attr, token = %token, "keyword matched");

        if cleaner.is_protected(&tag) {
            for (attr, value) in &values {
                if first_token_match(value, &filter.keywords, opts.case_sensitive).is_some() {
                    dom::remove_attribute(node, attr);
                    dropped += 1;
                }
            }
            return false;
        }
        true
    });

    FilterOutcome { removed, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{body_html, parse};
    use crate::options::Options;
    use crate::rules::AttributeRule;

    fn attribute_pass(html: &str) -> (String, FilterOutcome) {
        let doc = parse(html);
        let outcome = apply_attribute_rules(&doc.root(), &Cleaner::default());
        (body_html(&doc), outcome)
    }

    fn keyword_pass(html: &str) -> String {
        let doc = parse(html);
        apply_keyword_filter(&doc.root(), &Cleaner::default());
        body_html(&doc)
    }

    #[test]
    fn starts_with_rules() {
        assert_eq!(attribute_pass(r#"<a id="conditionalAd-test"></a>"#).0, "<body></body>");
        assert_eq!(attribute_pass(r#"<a class="publication"></a>"#).0, "<body></body>");
        assert_eq!(attribute_pass(r#"<input name="ad-test">"#).0, "<body></body>");
    }

    #[test]
    fn contains_rules() {
        assert_eq!(attribute_pass(r#"<a class="example-author"></a>"#).0, "<body></body>");
        assert_eq!(
            attribute_pass(r#"<input name="test-subscribe-example">"#).0,
            "<body></body>"
        );
        assert_eq!(attribute_pass(r#"<a id="wp-caption-text"></a>"#).0, "<body></body>");
    }

    #[test]
    fn ends_with_and_equals_rules() {
        assert_eq!(attribute_pass(r#"<a id="meta"></a>"#).0, "<body></body>");
        assert_eq!(attribute_pass(r#"<a class="test-meta"></a>"#).0, "<body></body>");
        assert_eq!(attribute_pass(r#"<input name="inset">"#).0, "<body></body>");
    }

    #[test]
    fn near_misses_survive() {
        let (html, outcome) = attribute_pass(r#"<a class="metadata">x</a><p id="insets">y</p>"#);
        assert_eq!(html, r#"<body><a class="metadata">x</a><p id="insets">y</p></body>"#);
        assert_eq!(outcome, FilterOutcome::default());
    }

    #[test]
    fn any_class_token_triggers_removal() {
        let (html, outcome) = attribute_pass(r#"<div class="story ad">x</div><p>y</p>"#);
        assert_eq!(html, "<body><p>y</p></body>");
        assert_eq!(outcome.removed, 1);
    }

    #[test]
    fn protected_body_loses_attribute_only() {
        let (html, outcome) = attribute_pass(r#"<body class="page-footer"><p>y</p></body>"#);
        assert_eq!(html, "<body><p>y</p></body>");
        assert_eq!(outcome, FilterOutcome { removed: 0, dropped: 1 });
    }

    #[test]
    fn case_insensitive_option_widens_matches() {
        let doc = parse(r#"<div class="PUBLICATION">x</div>"#);
        let cleaner = Cleaner::new(Options {
            case_sensitive: false,
            ..Options::default()
        })
        .unwrap();

        apply_attribute_rules(&doc.root(), &cleaner);

        assert_eq!(body_html(&doc), "<body></body>");
    }

    #[test]
    fn keyword_tokens_removed() {
        assert_eq!(keyword_pass(r#"<span class="caption">Example</span>"#), "<body></body>");
        assert_eq!(
            keyword_pass(r#"<span class="test google filter">Example</span>"#),
            "<body></body>"
        );
        assert_eq!(
            keyword_pass(r#"<span class="something-more">Example</span>"#),
            "<body></body>"
        );
    }

    #[test]
    fn keyword_exception_keeps_element() {
        assert_eq!(
            keyword_pass(r#"<p class="entry-more">Example</p>"#),
            r#"<body><p class="entry-more">Example</p></body>"#
        );
    }

    #[test]
    fn keyword_filter_is_independent_of_attribute_rules() {
        let mut options = Options::default();
        options.keyword_filter.keywords = vec![AttributeRule::equals("promo")];
        let cleaner = Cleaner::new(options).unwrap();

        let doc = parse(r#"<div class="promo">x</div><div class="caption">y</div>"#);
        let attr = apply_attribute_rules(&doc.root(), &cleaner);
        let kw = apply_keyword_filter(&doc.root(), &cleaner);

        assert_eq!(attr.removed, 0);
        assert_eq!(kw.removed, 1);
        assert_eq!(body_html(&doc), r#"<body><div class="caption">y</div></body>"#);
    }
}
