//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` arena tree. Every tree primitive the import
//! stages need goes through here, so the stages read as block-building logic
//! rather than as `dom_query` plumbing.
//!
//! Nodes are addressed by `NodeRef` handles into the document arena. A node
//! that is detached from its parent keeps its `NodeId` and stays in the arena,
//! so handles collected before a mutation never dangle; stages check
//! [`is_within`] before touching a node that an earlier step may have removed.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<body>` element of a parsed document.
///
/// html5ever always synthesizes a body, so this only returns `None` for
/// documents built by hand without one.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

// === Tag/Node Information ===

/// Get tag name (lowercase), `None` for text and comment nodes
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_string())
}

/// Check the tag name of a node
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating an empty value as missing
#[must_use]
pub fn non_empty_attr(node: &NodeRef, name: &str) -> Option<String> {
    attr(node, name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Set an attribute value
#[inline]
pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    node.set_attr(name, value);
}

/// Whitespace-separated class list of an element
#[must_use]
pub fn classes(node: &NodeRef) -> Vec<String> {
    node.attr("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Exact (case-sensitive) class membership
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    node.attr("class")
        .is_some_and(|c| c.split_whitespace().any(|token| token == class))
}

// === Text Content ===

/// All text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Inner HTML of a node
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

// === Tree Navigation ===

/// Parent element, `None` at the root or for detached nodes
#[inline]
#[must_use]
pub fn parent<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent()
}

/// Direct element children in document order (text nodes skipped)
#[inline]
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.element_children()
}

/// All element descendants of `root` in document order, excluding `root`
#[must_use]
pub fn descendants<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    Selection::from(*root).select("*").nodes().to_vec()
}

/// First descendant matching a CSS selector
#[must_use]
pub fn select_first<'a>(root: &NodeRef<'a>, selector: &str) -> Option<NodeRef<'a>> {
    Selection::from(*root)
        .try_select(selector)
        .and_then(|sel| sel.nodes().first().copied())
}

/// True when `node` is `root` or sits somewhere below it.
///
/// Used as the liveness test for handles collected before a mutation: a node
/// whose subtree was detached is no longer within the body.
#[must_use]
pub fn is_within(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.id == root.id {
            return true;
        }
        current = n.parent();
    }
    false
}

// === Tree Manipulation ===

/// Create a detached HTML element in the same arena as `anchor`.
///
/// `Tree::new_element` leaves the namespace empty, which makes void elements
/// serialize with an end tag (`<hr></hr>`). The element is instead parsed as
/// an HTML fragment into a scratch holder, then renamed: table parts cannot
/// be parsed outside a table, but a renamed `<div>` keeps its namespace.
#[must_use]
pub fn new_element<'a>(anchor: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    let holder = anchor.tree.new_element("div");
    Selection::from(holder).append_html("<div></div>");
    match holder.element_children().first() {
        Some(el) => {
            el.remove_from_parent();
            rename(el, tag);
            *el
        }
        None => anchor.tree.new_element(tag),
    }
}

/// Create a detached element holding a single text node
#[must_use]
pub fn new_element_with_text<'a>(anchor: &NodeRef<'a>, tag: &str, text: &str) -> NodeRef<'a> {
    let el = new_element(anchor, tag);
    let text_node = anchor.tree.new_text(text);
    el.append_child(&text_node);
    el
}

/// Append `child` as the last child of `parent`, moving it if already attached
#[inline]
pub fn append(parent: &NodeRef, child: &NodeRef) {
    parent.append_child(child);
}

/// Move `node` to sit immediately before `reference`
#[inline]
pub fn insert_before(reference: &NodeRef, node: &NodeRef) {
    reference.insert_before(node);
}

/// Move `node` to sit immediately after `reference`
#[inline]
pub fn insert_after(reference: &NodeRef, node: &NodeRef) {
    reference.insert_after(node);
}

/// Put `replacement` at the position of `old` and detach `old`
pub fn replace(old: &NodeRef, replacement: &NodeRef) {
    old.insert_before(replacement);
    old.remove_from_parent();
}

/// Detach a node (and its subtree) from the tree
#[inline]
pub fn detach(node: &NodeRef) {
    node.remove_from_parent();
}

/// Rename element tag in place, keeping attributes and children
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Remove every descendant of `root` matching a CSS selector.
///
/// Returns `false` when the selector does not parse.
pub fn remove_matching(root: &NodeRef, selector: &str) -> bool {
    let Ok(matcher) = Matcher::new(selector) else {
        return false;
    };
    Selection::from(*root).select_matcher(&matcher).remove();
    true
}
