//! Paragraph normalization for wanted containers.
//!
//! A container with no block-level descendant becomes a `p` in place.
//! Otherwise each loose run of text and inline children is wrapped in a
//! fresh `p` where the run began, and whitespace-only gaps left between
//! blocks are dropped.

use std::collections::HashSet;
use std::ops::Range;

use tracing::trace;

use super::{inline, Cleaner};
use crate::dom::{self, NodeRef};

/// Outcome of the normalization pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParagraphOutcome {
    pub renamed: usize,
    pub created: usize,
    /// Spans flattened inside renamed or created paragraphs.
    pub spans: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Text,
    Gap,
    Inline,
    Block,
}

fn classify(node: &NodeRef, run_inline_tags: &HashSet<String>) -> ChildKind {
    if node.is_text() {
        if dom::is_whitespace_text(node) {
            ChildKind::Gap
        } else {
            ChildKind::Text
        }
    } else {
        match dom::tag_name(node) {
            Some(tag) if run_inline_tags.contains(&tag) => ChildKind::Inline,
            _ => ChildKind::Block,
        }
    }
}

/// Maximal text/inline runs that carry at least one non-blank text node.
///
/// Gaps between run members belong to the run. A gap before the first or
/// after the last member stays outside.
fn loose_runs(kinds: &[ChildKind]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut open: Option<Range<usize>> = None;
    let mut has_text = false;

    let mut close = |open: &mut Option<Range<usize>>, has_text: bool| {
        if let Some(run) = open.take() {
            if has_text {
                runs.push(run);
            }
        }
    };

    for (i, kind) in kinds.iter().enumerate() {
        match kind {
            ChildKind::Text | ChildKind::Inline => {
                match open.as_mut() {
                    Some(run) => run.end = i + 1,
                    None => {
                        open = Some(i..i + 1);
                        has_text = false;
                    }
                }
                has_text |= *kind == ChildKind::Text;
            }
            ChildKind::Gap => {}
            ChildKind::Block => close(&mut open, has_text),
        }
    }
    close(&mut open, has_text);
    runs
}

/// Wrap loose runs of `container` in new paragraphs.
fn regroup(container: &NodeRef, run_inline_tags: &HashSet<String>, outcome: &mut ParagraphOutcome) {
    let children = container.children();
    let kinds: Vec<ChildKind> = children
        .iter()
        .map(|c| classify(c, run_inline_tags))
        .collect();

    let runs = loose_runs(&kinds);
    if runs.is_empty() {
        return;
    }

    for (i, (child, kind)) in children.iter().zip(&kinds).enumerate() {
        if *kind == ChildKind::Gap && !runs.iter().any(|run| run.contains(&i)) {
            dom::detach(child);
        }
    }

    for run in runs {
        let para = dom::new_element(container, "p");
        children[run.start].insert_before(&para);

        for i in run {
            let child = &children[i];
            if kinds[i] == ChildKind::Inline {
                para.append_child(&dom::new_text(container, " "));
                dom::move_into(&para, child);
                para.append_child(&dom::new_text(container, " "));
            } else {
                dom::move_into(&para, child);
            }
        }

        outcome.spans += inline::unwrap_paragraph_spans(&para, true);
        outcome.created += 1;
    }
}

/// Normalize every wanted container under `root`, in document order.
pub(crate) fn normalize_paragraphs(root: &NodeRef, cleaner: &Cleaner) -> ParagraphOutcome {
    let mut outcome = ParagraphOutcome::default();

    let wanted: Vec<NodeRef> = root
        .descendants()
        .into_iter()
        .filter(|n| dom::tag_name(n).is_some_and(|t| cleaner.wanted_tags.contains(&t)))
        .collect();

    for node in wanted {
        // A nested wanted container becomes a block of its own, so it
        // stops the outer one from turning into a paragraph.
        if dom::has_descendant_tag(&node, &cleaner.block_tags)
            || dom::has_descendant_tag(&node, &cleaner.wanted_tags)
        {
            regroup(&node, &cleaner.run_inline_tags, &mut outcome);
        } else {
            trace!(tag = ?dom::tag_name(&node), "renaming container to paragraph");
            dom::rename(&node, "p");
            outcome.renamed += 1;
            outcome.spans += inline::unwrap_paragraph_spans(&node, true);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{body_html, parse};

    fn normalize(html: &str) -> (String, ParagraphOutcome) {
        let doc = parse(html);
        let outcome = normalize_paragraphs(&doc.root(), &Cleaner::default());
        (body_html(&doc), outcome)
    }

    #[test]
    fn loose_runs_require_text() {
        use ChildKind::{Block, Gap, Inline, Text};

        assert_eq!(loose_runs(&[Block, Inline, Text, Block]), vec![1..3]);
        assert_eq!(loose_runs(&[Text, Block, Gap, Inline]), vec![0..1]);
        assert!(loose_runs(&[Block, Gap, Inline]).is_empty());
    }

    #[test]
    fn gaps_inside_a_run_do_not_split_it() {
        use ChildKind::{Block, Gap, Inline, Text};

        assert_eq!(loose_runs(&[Inline, Gap, Text]), vec![0..3]);
        assert_eq!(loose_runs(&[Block, Text, Text, Gap, Text]), vec![1..5]);
        assert_eq!(loose_runs(&[Gap, Text, Gap, Block, Gap]), vec![1..2]);
    }

    #[test]
    fn flattened_sentence_stays_in_one_paragraph() {
        let doc = parse("<div><pre>x</pre>Hello <b>big</b> world</div>");

        let stats = Cleaner::default().clean_document(&doc);

        assert_eq!(stats.paragraphs_created, 1);
        assert_eq!(
            body_html(&doc),
            "<body><div><pre>x</pre><p>Hello big  world</p></div></body>"
        );
    }

    #[test]
    fn spaced_anchors_share_a_paragraph() {
        let (html, outcome) = normalize("<div><pre>x</pre><a>one</a> <a>two</a> end</div>");

        assert_eq!(outcome.created, 1);
        assert_eq!(
            html,
            "<body><div><pre>x</pre><p> <a>one</a>   <a>two</a>  end</p></div></body>"
        );
    }

    #[test]
    fn nested_wanted_containers_are_not_nested_paragraphs() {
        let (html, outcome) =
            normalize("<article><section>a</section><section>b</section></article>");

        assert_eq!(
            html,
            "<body><article><p>a</p><p>b</p></article></body>"
        );
        assert_eq!(outcome.renamed, 2);
        assert_eq!(outcome.created, 0);
    }

    #[test]
    fn text_beside_nested_section_is_wrapped() {
        let (html, _) = normalize("<div>intro <section>x</section></div>");

        assert_eq!(html, "<body><div><p>intro </p><p>x</p></div></body>");
    }

    #[test]
    fn leaf_container_renamed() {
        let (html, outcome) = normalize(r#"<article attr="value">No children!</article>"#);

        assert_eq!(html, r#"<body><p attr="value">No children!</p></body>"#);
        assert_eq!(outcome.renamed, 1);
    }

    #[test]
    fn loose_text_wrapped_around_blocks() {
        let (html, outcome) =
            normalize("<div><img> text <p>No children!</p> text</div>");

        assert_eq!(
            html,
            "<body><div><img><p> text </p><p>No children!</p><p> text</p></div></body>"
        );
        assert_eq!(outcome.created, 2);
    }

    #[test]
    fn inline_run_gets_space_padding() {
        let (html, _) =
            normalize("<div><img><a>Example<img></a> Text Node! <pre>Test!</pre></div>");

        assert_eq!(
            html,
            "<body><div><img><p> <a>Example<img></a>  Text Node! </p><pre>Test!</pre></div></body>"
        );
    }

    #[test]
    fn standalone_inline_left_in_place() {
        let (html, outcome) =
            normalize("<div><img>Text Node! <pre>Test!</pre> <a>Example<img></a></div>");

        assert_eq!(
            html,
            "<body><div><img><p>Text Node! </p><pre>Test!</pre><a>Example<img></a></div></body>"
        );
        assert_eq!(outcome.created, 1);
    }

    #[test]
    fn container_without_runs_untouched() {
        let (html, outcome) = normalize("<div><pre>a</pre> <pre>b</pre></div>");

        assert_eq!(html, "<body><div><pre>a</pre> <pre>b</pre></div></body>");
        assert_eq!(outcome, ParagraphOutcome::default());
    }

    #[test]
    fn spans_flattened_in_new_paragraph() {
        let (html, outcome) = normalize("<div><img>x<span>y</span></div>");

        assert_eq!(html, "<body><div><img><p>x y </p></div></body>");
        assert_eq!(outcome.spans, 1);
    }

    #[test]
    fn body_is_not_a_wanted_container() {
        let input = "<p><img><a>Example<img></a> Text Node!</p> <pre>Test!</pre>";
        let (html, outcome) = normalize(input);

        assert_eq!(html, format!("<body>{input}</body>"));
        assert_eq!(outcome, ParagraphOutcome::default());
    }
}
