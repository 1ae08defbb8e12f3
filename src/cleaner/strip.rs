//! Leaf removal passes: comments, scripts/styles and structural noise.

use std::collections::HashSet;

use tracing::trace;

use crate::dom::{self, NodeRef};
use crate::patterns::SCRIPT_TAG_SET;

/// Detach every comment node. Returns the number removed.
pub(crate) fn remove_comments(root: &NodeRef) -> usize {
    dom::prune(root, &mut |node| node.is_comment())
}

/// Detach every `script`/`style` element without looking inside.
pub(crate) fn remove_scripts(root: &NodeRef) -> usize {
    dom::prune(root, &mut |node| {
        dom::tag_name(node).is_some_and(|tag| SCRIPT_TAG_SET.contains(tag.as_str()))
    })
}

/// Detach every element whose tag is in `noise_tags`.
///
/// Nested noise goes with its outermost noisy ancestor.
pub(crate) fn remove_noise(root: &NodeRef, noise_tags: &HashSet<String>) -> usize {
    dom::prune(root, &mut |node| match dom::tag_name(node) {
        Some(tag) if noise_tags.contains(&tag) => {
            trace!(tag = %tag, "removing structural noise");
            true
        }
        _ => false,
    })
}
