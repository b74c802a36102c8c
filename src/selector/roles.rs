//! Structural roles assigned in a single pre-pass.
//!
//! The exported markup marks layout intent only through tag names, class
//! names and a few attributes. Those string conventions are tested once, here,
//! and turned into a closed set of [`Role`]s keyed by arena `NodeId`. Later
//! stages pattern-match on roles instead of re-testing class strings.

use crate::dom::{self, NodeId, NodeRef};
use std::collections::HashMap;

/// Layout role of an element in the exported markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Flex wrapper whose only job is to lay out its children.
    GroupingContainer,
    /// Bounding content region (`.container`).
    ContentRegion,
    /// Tab list control (`<con-tablist>`).
    TabList,
    /// One tab header inside a tab list (`role="tab"`).
    TabHeader,
    /// Embedded `<form>`.
    FormWidget,
    /// Personalization / experience fragment (`.xf`, `.dxf`).
    PersonalizationWidget,
    /// Section title inside a grouping container (`.title`).
    Title,
    /// `<h1>`.
    PrimaryHeading,
    /// `<h2>`.
    SecondaryHeading,
    /// `<picture>`.
    Media,
    /// `<video>`.
    Video,
    /// Lazy-loaded icon image (`img.dexter-LazyImage`).
    Icon,
}

impl Role {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of roles carried by one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSet(u16);

impl RoleSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    pub fn remove(&mut self, role: Role) {
        self.0 &= !role.bit();
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Class names of the source site's layout conventions.
const GROUPING_CONTAINER_CLASS: &str = "dexter-FlexContainer-Items";
const CONTENT_REGION_CLASS: &str = "container";
const TITLE_CLASS: &str = "title";
const ICON_CLASS: &str = "dexter-LazyImage";
const PERSONALIZATION_CLASSES: [&str; 2] = ["xf", "dxf"];

/// Derive the roles of one element from its tag, classes and attributes.
#[must_use]
pub fn classify(node: &NodeRef) -> RoleSet {
    let mut set = RoleSet::empty();
    let Some(tag) = dom::tag_name(node) else {
        return set;
    };

    match tag.as_str() {
        "h1" => set.insert(Role::PrimaryHeading),
        "h2" => set.insert(Role::SecondaryHeading),
        "picture" => set.insert(Role::Media),
        "video" => set.insert(Role::Video),
        "form" => set.insert(Role::FormWidget),
        "con-tablist" => set.insert(Role::TabList),
        _ => {}
    }

    if dom::attr(node, "role").is_some_and(|r| r == "tab") {
        set.insert(Role::TabHeader);
    }

    for class in dom::classes(node) {
        match class.as_str() {
            GROUPING_CONTAINER_CLASS => set.insert(Role::GroupingContainer),
            CONTENT_REGION_CLASS => set.insert(Role::ContentRegion),
            TITLE_CLASS => set.insert(Role::Title),
            ICON_CLASS if tag == "img" => set.insert(Role::Icon),
            c if PERSONALIZATION_CLASSES.contains(&c) => set.insert(Role::PersonalizationWidget),
            _ => {}
        }
    }

    set
}

/// Roles of every element under a root, keyed by arena id.
///
/// Nodes created after the pre-pass (block tables, separators, sections)
/// have no entry and therefore no role.
#[derive(Debug, Default)]
pub struct RoleMap {
    roles: HashMap<NodeId, RoleSet>,
}

impl RoleMap {
    /// Run the pre-pass over the element descendants of `root`.
    ///
    /// `root` itself gets no role: stages insert siblings next to the nodes
    /// they match, and nothing may land outside the root.
    #[must_use]
    pub fn build(root: &NodeRef) -> Self {
        let mut roles = HashMap::new();
        for node in dom::descendants(root) {
            let set = classify(&node);
            if !set.is_empty() {
                roles.insert(node.id, set);
            }
        }
        Self { roles }
    }

    /// Roles of a node (empty when the node had none or is new).
    #[must_use]
    pub fn roles_of(&self, node: &NodeRef) -> RoleSet {
        self.roles.get(&node.id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn has(&self, node: &NodeRef, role: Role) -> bool {
        self.roles_of(node).contains(role)
    }

    /// Give a node a role, e.g. after renaming it.
    pub fn assign(&mut self, node: &NodeRef, role: Role) {
        self.roles.entry(node.id).or_default().insert(role);
    }

    /// Take a role away from a node.
    pub fn revoke(&mut self, node: &NodeRef, role: Role) {
        if let Some(set) = self.roles.get_mut(&node.id) {
            set.remove(role);
        }
    }

    /// All descendants of `root` carrying `role`, in current document order.
    ///
    /// The result is a snapshot: callers may mutate the tree while walking it.
    #[must_use]
    pub fn find_all<'a>(&self, root: &NodeRef<'a>, role: Role) -> Vec<NodeRef<'a>> {
        dom::descendants(root)
            .into_iter()
            .filter(|n| self.has(n, role))
            .collect()
    }

    /// First descendant of `root` carrying `role`, in document order.
    #[must_use]
    pub fn find_first<'a>(&self, root: &NodeRef<'a>, role: Role) -> Option<NodeRef<'a>> {
        dom::descendants(root).into_iter().find(|n| self.has(n, role))
    }

    /// Number of nodes with at least one role.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
