//! DOM Operations Adapter
//!
//! Node-level tree operations over the `dom_query` crate. Every pass in the
//! cleaner goes through these helpers, so mutation rules (snapshot children
//! before detaching, splice in order) live in one place.

use std::collections::HashSet;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing & Serialization ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialize the whole document
#[inline]
#[must_use]
pub fn document_html(doc: &Document) -> StrTendril {
    doc.html()
}

/// Serialize the `<body>` element, tags included
#[must_use]
pub fn body_html(doc: &Document) -> String {
    doc.select("body").html().to_string()
}

// === Node Information ===

/// Get tag name (lowercase) of an element node
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    node.remove_attr(name);
}

/// Whitespace-separated tokens of the `class` attribute
#[must_use]
pub fn class_tokens(node: &NodeRef) -> Vec<String> {
    get_attribute(node, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// True for a text node holding only whitespace
#[must_use]
pub fn is_whitespace_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

/// True if any element below `node` has one of `tags`
#[must_use]
pub fn has_descendant_tag(node: &NodeRef, tags: &HashSet<String>) -> bool {
    node.descendants()
        .iter()
        .filter_map(tag_name)
        .any(|t| tags.contains(&t))
}

// === Tree Manipulation ===

/// Create a detached element in the same tree as `near`
#[inline]
#[must_use]
pub fn new_element<'a>(near: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    near.tree.new_element(tag)
}

/// Create a detached text node in the same tree as `near`
#[inline]
#[must_use]
pub fn new_text<'a>(near: &NodeRef<'a>, text: &str) -> NodeRef<'a> {
    near.tree.new_text(text)
}

/// Detach a node (and its subtree) from its parent
#[inline]
pub fn detach(node: &NodeRef) {
    node.remove_from_parent();
}

/// Move `node` to the end of `parent`'s children
pub fn move_into(parent: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    parent.append_child(node);
}

/// Move `node` directly in front of `anchor`
pub fn move_before(anchor: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    anchor.insert_before(node);
}

/// Rename element tag, keeping attributes and children
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    node.rename(new_tag);
}

/// Replace an element with its children, one level, in order.
///
/// Returns the spliced children.
pub fn unwrap<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let children = node.children();
    for child in &children {
        move_before(node, child);
    }
    node.remove_from_parent();
    children
}

/// Replace a node with a single text node. Returns the new text node.
pub fn replace_with_text<'a>(node: &NodeRef<'a>, text: &str) -> NodeRef<'a> {
    let replacement = new_text(node, text);
    node.insert_before(&replacement);
    node.remove_from_parent();
    replacement
}

/// Depth-first removal over snapshotted child lists.
///
/// Nodes for which `should_remove` returns true are detached and not
/// descended into. Returns the number of detached nodes.
pub fn prune<F>(root: &NodeRef, should_remove: &mut F) -> usize
where
    F: FnMut(&NodeRef) -> bool,
{
    let mut removed = 0;
    for child in root.children() {
        if should_remove(&child) {
            detach(&child);
            removed += 1;
        } else {
            removed += prune(&child, should_remove);
        }
    }
    removed
}
