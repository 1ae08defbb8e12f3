//! Inline flattening passes: drop caps, formatting tags and spans.
//!
//! All three walk bottom-up so that an unwrapped element never exposes
//! children that were already visited.

use std::collections::HashSet;

use tracing::trace;

use crate::dom::{self, NodeRef};

/// Replace drop-cap elements with a text node of their text content.
pub(crate) fn replace_drop_caps(node: &NodeRef, classes: &HashSet<String>) -> usize {
    let mut replaced = 0;
    for child in node.children() {
        if !child.is_element() {
            continue;
        }
        if dom::class_tokens(&child).iter().any(|c| classes.contains(c)) {
            let text = dom::text_content(&child);
            dom::replace_with_text(&child, &text);
            replaced += 1;
        } else {
            replaced += replace_drop_caps(&child, classes);
        }
    }
    replaced
}

/// Unwrap inline formatting elements one level.
///
/// Elements holding media are left intact. An unwrapped element is
/// followed by a single space unless its text already ends in whitespace.
pub(crate) fn unwrap_inline_tags(
    node: &NodeRef,
    inline_tags: &HashSet<String>,
    media_tags: &HashSet<String>,
) -> usize {
    let mut unwrapped = 0;
    for child in node.children() {
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        unwrapped += unwrap_inline_tags(&child, inline_tags, media_tags);

        if !inline_tags.contains(&tag) || dom::has_descendant_tag(&child, media_tags) {
            continue;
        }

        if !dom::text_content(&child).ends_with(char::is_whitespace) {
            let space = dom::new_text(&child, " ");
            match child.next_sibling() {
                Some(next) => next.insert_before(&space),
                None => node.append_child(&space),
            }
        }
        trace!(tag = %tag, "unwrapping inline element");
        dom::unwrap(&child);
        unwrapped += 1;
    }
    unwrapped
}

/// Unwrap every `span` that has a `p` ancestor. No separator is added.
///
/// `in_paragraph` tells whether `node` itself sits inside a paragraph;
/// pass `true` when `node` is a `p`.
pub(crate) fn unwrap_paragraph_spans(node: &NodeRef, in_paragraph: bool) -> usize {
    let mut unwrapped = 0;
    for child in node.children() {
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        unwrapped += unwrap_paragraph_spans(&child, in_paragraph || tag == "p");

        if in_paragraph && tag == "span" {
            dom::unwrap(&child);
            unwrapped += 1;
        }
    }
    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{body_html, parse};

    fn set(tags: &[&str]) -> HashSet<String> {
        tags.iter().map(|s| (*s).to_string()).collect()
    }

    fn inline() -> HashSet<String> {
        set(&["em", "strong", "b", "i", "strike", "del", "ins"])
    }

    #[test]
    fn drop_cap_replaced_by_text() {
        let doc = parse(r#"<p><span class="dropcap">E</span>xample</p>"#);

        let n = replace_drop_caps(&doc.root(), &set(&["dropcap", "drop_cap"]));

        assert_eq!(n, 1);
        assert_eq!(body_html(&doc), "<body><p>Example</p></body>");
    }

    #[test]
    fn drop_cap_matches_any_class_token() {
        let doc = parse(r#"<div><b class="big drop_cap">A</b>nd</div>"#);

        replace_drop_caps(&doc.root(), &set(&["dropcap", "drop_cap"]));

        assert_eq!(body_html(&doc), "<body><div>And</div></body>");
    }

    #[test]
    fn inline_tags_unwrapped_with_separator() {
        let doc = parse(
            "<p><em>a</em><strong>b</strong><b>c</b><i>d</i><strike>e</strike><del>f</del><ins>g</ins></p>",
        );

        let n = unwrap_inline_tags(&doc.root(), &inline(), &set(&["img"]));

        assert_eq!(n, 7);
        assert_eq!(body_html(&doc), "<body><p>a b c d e f g </p></body>");
    }

    #[test]
    fn inline_with_media_is_kept() {
        let doc = parse("<p><em>a</em><em>b<img></em></p>");

        unwrap_inline_tags(&doc.root(), &inline(), &set(&["img"]));

        assert_eq!(body_html(&doc), "<body><p>a <em>b<img></em></p></body>");
    }

    #[test]
    fn nested_inline_gets_one_separator() {
        let doc = parse("<p><em><b>x</b></em>y</p>");

        let n = unwrap_inline_tags(&doc.root(), &inline(), &set(&["img"]));

        assert_eq!(n, 2);
        assert_eq!(body_html(&doc), "<body><p>x y</p></body>");
    }

    #[test]
    fn trailing_whitespace_suppresses_separator() {
        let doc = parse("<p><b>x </b>y</p>");

        unwrap_inline_tags(&doc.root(), &inline(), &set(&["img"]));

        assert_eq!(body_html(&doc), "<body><p>x y</p></body>");
    }

    #[test]
    fn spans_unwrapped_only_inside_paragraphs() {
        let doc = parse("<p><span>a<span>b</span></span>c</p><div><span>d</span></div>");

        let n = unwrap_paragraph_spans(&doc.root(), false);

        assert_eq!(n, 2);
        assert_eq!(
            body_html(&doc),
            "<body><p>abc</p><div><span>d</span></div></body>"
        );
    }

    #[test]
    fn span_keeps_media_children() {
        let doc = parse("<p><span><img>x</span></p>");

        unwrap_paragraph_spans(&doc.root(), false);

        assert_eq!(body_html(&doc), "<body><p><img>x</p></body>");
    }
}
