//! Block Table Builder
//!
//! A block is the tabular form a downstream renderer reads as one semantic
//! unit: a header row holding the block name, then one row per entry.
//!
//! ```html
//! <table>
//!   <tr><th colspan="2">Section Metadata</th></tr>
//!   <tr><td>tab</td><td>Overview</td></tr>
//! </table>
//! ```
//!
//! Cell content given as nodes is moved, not copied, so anything nested inside
//! it (including blocks built earlier) keeps its identity.

use crate::dom::{self, NodeRef};
use crate::error::{Error, Result};

/// Block names understood downstream.
pub const COLUMNS: &str = "Columns";
pub const TABS: &str = "Tabs";
pub const SECTION_METADATA: &str = "Section Metadata";
pub const METADATA: &str = "Metadata";

/// Content of one table cell.
#[derive(Debug, Clone)]
pub enum Cell<'a> {
    /// Plain text, inserted as a text node.
    Text(String),
    /// An existing or freshly built node, moved into the cell.
    Node(NodeRef<'a>),
}

impl From<&str> for Cell<'_> {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell<'_> {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl<'a> From<NodeRef<'a>> for Cell<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        Cell::Node(node)
    }
}

/// Shape a container (or page region) was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Leading heading + media pairing.
    Hero,
    /// Tab list with its panels.
    TabGroup,
    /// Two or more cells laid out side by side.
    Columns,
    /// One content child; no table, maybe a separator.
    Singleton,
    /// Nothing to do.
    Skip,
}

/// A classification decision, consumed immediately by the stage that made it.
#[derive(Debug, Clone)]
pub struct ClassifiedBlock<'a> {
    pub shape: Shape,
    /// Node the decision was made for.
    pub source: NodeRef<'a>,
    /// Leading title detached from the container, if any.
    pub title: Option<NodeRef<'a>>,
    /// Ordered cell contents.
    pub cells: Vec<NodeRef<'a>>,
}

impl<'a> ClassifiedBlock<'a> {
    #[must_use]
    pub fn skip(source: NodeRef<'a>) -> Self {
        Self {
            shape: Shape::Skip,
            source,
            title: None,
            cells: Vec::new(),
        }
    }
}

/// Rectangular block table: a label row followed by data rows.
#[derive(Debug, Clone)]
pub struct BlockTable<'a> {
    label: String,
    rows: Vec<Vec<Cell<'a>>>,
}

impl<'a> BlockTable<'a> {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rows: Vec::new(),
        }
    }

    /// Add a data row.
    #[must_use]
    pub fn row(mut self, cells: Vec<Cell<'a>>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Add a `key | value` row.
    #[must_use]
    pub fn key_value(self, key: &str, value: impl Into<Cell<'a>>) -> Self {
        self.row(vec![Cell::from(key), value.into()])
    }

    /// Column count: the widest data row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(1).max(1)
    }

    /// Build the detached `<table>` in the arena of `anchor`.
    ///
    /// # Errors
    /// Returns `Error::EmptyBlock` when no data row was added; every block
    /// this crate emits has at least one entry.
    pub fn build(self, anchor: &NodeRef<'a>) -> Result<NodeRef<'a>> {
        if self.rows.is_empty() {
            return Err(Error::EmptyBlock(self.label));
        }
        let width = self.width();
        let table = dom::new_element(anchor, "table");

        let header_row = dom::new_element(anchor, "tr");
        let th = dom::new_element_with_text(anchor, "th", &self.label);
        if width > 1 {
            dom::set_attr(&th, "colspan", &width.to_string());
        }
        dom::append(&header_row, &th);
        dom::append(&table, &header_row);

        for cells in self.rows {
            let tr = dom::new_element(anchor, "tr");
            for cell in cells {
                let td = dom::new_element(anchor, "td");
                match cell {
                    Cell::Text(text) => {
                        let text_node = anchor.tree.new_text(text);
                        dom::append(&td, &text_node);
                    }
                    Cell::Node(node) => dom::append(&td, &node),
                }
                dom::append(&tr, &td);
            }
            dom::append(&table, &tr);
        }

        Ok(table)
    }

    /// Build the table and put it in place of `reference`.
    ///
    /// `reference` is detached. Cell nodes taken from inside it are moved out
    /// first, so they survive the replacement.
    ///
    /// # Errors
    /// See [`BlockTable::build`].
    pub fn replace(self, reference: &NodeRef<'a>) -> Result<NodeRef<'a>> {
        let table = self.build(reference)?;
        dom::replace(reference, &table);
        Ok(table)
    }

    /// Build the table and append it as the last child of `parent`.
    ///
    /// # Errors
    /// See [`BlockTable::build`].
    pub fn append_to(self, parent: &NodeRef<'a>) -> Result<NodeRef<'a>> {
        let table = self.build(parent)?;
        dom::append(parent, &table);
        Ok(table)
    }
}

/// Read a produced table back as rows of trimmed cell texts, label row first.
///
/// Mirrors the block wire format, e.g. `[["Columns"], ["a"], ["b"]]`.
#[must_use]
pub fn table_texts(table: &NodeRef) -> Vec<Vec<String>> {
    dom::element_children(table)
        .iter()
        .filter(|tr| dom::is_tag(tr, "tr"))
        .map(|tr| {
            dom::element_children(tr)
                .iter()
                .map(|cell| dom::text_content(cell).trim().to_string())
                .collect()
        })
        .collect()
}
