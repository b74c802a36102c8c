//! Node Predicate Library
//!
//! Pure structural tests over tree nodes: child counts, role membership and
//! the closest ancestor satisfying a predicate. Nothing here mutates the tree.

use crate::dom::{self, NodeRef};

pub mod roles;

pub use roles::{Role, RoleMap, RoleSet};

/// Walks strictly upward from the parent of `node` and returns the first
/// ancestor satisfying `rule`.
///
/// O(depth). `node` itself is never a match.
#[must_use]
pub fn closest_ancestor_matching<'a, F>(node: &NodeRef<'a>, rule: F) -> Option<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    let mut current = dom::parent(node);
    while let Some(ancestor) = current {
        if rule(&ancestor) {
            return Some(ancestor);
        }
        current = dom::parent(&ancestor);
    }
    None
}

/// Closest ancestor carrying `role`.
#[must_use]
pub fn closest_with_role<'a>(node: &NodeRef<'a>, roles: &RoleMap, role: Role) -> Option<NodeRef<'a>> {
    closest_ancestor_matching(node, |n| roles.has(n, role))
}

/// True when some ancestor of `node` is a `<table>`, i.e. the node already
/// sits inside a produced block.
#[must_use]
pub fn is_inside_table(node: &NodeRef) -> bool {
    closest_ancestor_matching(node, |n| dom::is_tag(n, "table")).is_some()
}

/// Number of element children.
#[must_use]
pub fn element_count(node: &NodeRef) -> usize {
    dom::element_children(node).len()
}

/// A grouping container with at least two element children.
///
/// Containers with zero or one child are never laid out as multi-cell blocks.
#[must_use]
pub fn is_eligible_container(node: &NodeRef, roles: &RoleMap) -> bool {
    roles.has(node, Role::GroupingContainer) && element_count(node) >= 2
}
