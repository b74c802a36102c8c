//! Container Classifier
//!
//! Decides, from structure alone, which grouping containers are layout grids.
//! The exported markup nests flex wrappers freely, so most wrappers are noise.
//! The rules are:
//!
//! - A container is *eligible* when it is a grouping container with at least
//!   two element children.
//! - Only eligible containers without an eligible ancestor are classified. An
//!   eligible container nested in another one ends up inside one of the
//!   outer container's cells, untouched.
//! - Containers already inside a block table, or holding the page heading,
//!   are skipped.
//! - A leading `.title` child is lifted out in front of the container.
//! - Two or more remaining children become a `Columns` block, one row each.
//!   A single remaining child stays in place, followed by a separator when it
//!   has visible text.

use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::importer::blocks::{self, BlockTable, Cell, ClassifiedBlock, Shape};
use crate::selector::{self, Role, RoleMap};

/// Counters for one classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnsSummary {
    /// Containers turned into `Columns` blocks.
    pub columns: usize,
    /// Single-child containers left in place.
    pub singletons: usize,
    /// Separators inserted after singletons.
    pub separators: usize,
    /// Candidates skipped.
    pub skipped: usize,
}

/// Eligible grouping containers that have no eligible ancestor, in document
/// order.
///
/// One depth-first walk carries an "under an eligible container" flag down
/// the tree, so the cost is linear in the tree size rather than a walk to the
/// root per candidate.
#[must_use]
pub fn outermost_eligible<'a>(root: &NodeRef<'a>, roles: &RoleMap) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    let mut stack: Vec<(NodeRef<'a>, bool)> = dom::element_children(root)
        .into_iter()
        .rev()
        .map(|child| (child, false))
        .collect();

    while let Some((node, covered)) = stack.pop() {
        let eligible = selector::is_eligible_container(&node, roles);
        if eligible && !covered {
            found.push(node);
        }
        let covered = covered || eligible;
        stack.extend(
            dom::element_children(&node)
                .into_iter()
                .rev()
                .map(|child| (child, covered)),
        );
    }
    found
}

/// Decide the shape of one candidate container. Does not touch the tree.
#[must_use]
pub fn classify_container<'a>(container: &NodeRef<'a>, roles: &RoleMap) -> ClassifiedBlock<'a> {
    if selector::is_inside_table(container)
        || roles.find_first(container, Role::PrimaryHeading).is_some()
    {
        return ClassifiedBlock::skip(*container);
    }

    let mut children = dom::element_children(container);
    let title = match children.first() {
        Some(first) if roles.has(first, Role::Title) => Some(children.remove(0)),
        _ => None,
    };

    let shape = match children.len() {
        0 => Shape::Skip,
        1 => Shape::Singleton,
        _ => Shape::Columns,
    };

    ClassifiedBlock {
        shape,
        source: *container,
        title,
        cells: children,
    }
}

/// Apply a classification decision to the tree.
///
/// # Errors
/// Only on an internal block-building defect.
pub fn apply_container<'a>(block: &ClassifiedBlock<'a>, summary: &mut ColumnsSummary) -> Result<()> {
    let container = block.source;
    if let Some(title) = block.title {
        dom::insert_before(&container, &title);
    }

    match block.shape {
        Shape::Columns => {
            block
                .cells
                .iter()
                .fold(BlockTable::new(blocks::COLUMNS), |table, cell| {
                    table.row(vec![Cell::Node(*cell)])
                })
                .replace(&container)?;
            summary.columns += 1;
        }
        Shape::Singleton => {
            summary.singletons += 1;
            let has_text = block
                .cells
                .first()
                .is_some_and(|cell| !dom::text_content(cell).trim().is_empty());
            if has_text {
                let separator = dom::new_element(&container, "hr");
                dom::insert_after(&container, &separator);
                summary.separators += 1;
            }
        }
        Shape::Skip | Shape::Hero | Shape::TabGroup => summary.skipped += 1,
    }
    Ok(())
}

/// Classify and convert every outermost eligible container under `body`.
///
/// # Errors
/// Only on an internal block-building defect.
pub fn guess_columns<'a>(body: &NodeRef<'a>, roles: &RoleMap) -> Result<ColumnsSummary> {
    let mut summary = ColumnsSummary::default();
    for container in outermost_eligible(body, roles) {
        let block = classify_container(&container, roles);
        apply_container(&block, &mut summary)?;
    }
    tracing::debug!(
        columns = summary.columns,
        singletons = summary.singletons,
        skipped = summary.skipped,
        "classified grouping containers"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::blocks::table_texts;

    fn ids(nodes: &[NodeRef]) -> Vec<String> {
        nodes.iter().filter_map(|n| dom::attr(n, "id")).collect()
    }

    #[test]
    fn test_outermost_eligible_skips_nested() {
        let doc = dom::parse(
            r#"
            <div class="dexter-FlexContainer-Items" id="single">
              <div class="dexter-FlexContainer-Items" id="outer">
                <div class="dexter-FlexContainer-Items" id="inner"><p>a</p><p>b</p></div>
                <p>c</p>
              </div>
            </div>
            <div class="dexter-FlexContainer-Items" id="second"><p>x</p><p>y</p></div>
            "#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        assert_eq!(ids(&outermost_eligible(&body, &roles)), vec!["outer", "second"]);
    }

    #[test]
    fn test_classify_lifts_title() {
        let doc = dom::parse(
            r#"<div class="dexter-FlexContainer-Items" id="c">
                 <p class="title">Heading</p><p>a</p><p>b</p>
               </div>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        let container = dom::select_first(&body, "#c").unwrap();

        let block = classify_container(&container, &roles);
        assert_eq!(block.shape, Shape::Columns);
        assert!(block.title.is_some());
        assert_eq!(block.cells.len(), 2);
    }

    #[test]
    fn test_title_and_single_child_is_singleton() {
        let doc = dom::parse(
            r#"<section><div class="dexter-FlexContainer-Items" id="c">
                 <p class="title">Heading</p><p>only</p>
               </div></section>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);

        let summary = guess_columns(&body, &roles).unwrap();
        assert_eq!(summary.singletons, 1);
        assert_eq!(summary.separators, 1);

        let section = dom::select_first(&body, "section").unwrap();
        let tags: Vec<_> = dom::element_children(&section)
            .iter()
            .filter_map(dom::tag_name)
            .collect();
        assert_eq!(tags, vec!["p", "div", "hr"]);
    }

    #[test]
    fn test_empty_singleton_gets_no_separator() {
        let doc = dom::parse(
            r#"<div class="dexter-FlexContainer-Items">
                 <p class="title">Heading</p><div>   </div>
               </div>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);

        let summary = guess_columns(&body, &roles).unwrap();
        assert_eq!(summary.singletons, 1);
        assert_eq!(summary.separators, 0);
        assert!(dom::select_first(&body, "hr").is_none());
    }

    #[test]
    fn test_columns_keep_child_order() {
        let doc = dom::parse(
            r#"<div class="dexter-FlexContainer-Items"><p>a</p><p>b</p><p>c</p></div>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);

        let summary = guess_columns(&body, &roles).unwrap();
        assert_eq!(summary.columns, 1);
        let table = dom::select_first(&body, "table").unwrap();
        assert_eq!(
            table_texts(&table),
            vec![vec!["Columns"], vec!["a"], vec!["b"], vec!["c"]]
        );
    }

    #[test]
    fn test_container_with_heading_is_skipped() {
        let doc = dom::parse(
            r#"<div class="dexter-FlexContainer-Items"><div><h1>Hero</h1></div><p>b</p></div>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);

        let summary = guess_columns(&body, &roles).unwrap();
        assert_eq!(summary.skipped, 1);
        assert!(dom::select_first(&body, "table").is_none());
    }

    #[test]
    fn test_container_inside_table_is_skipped() {
        let doc = dom::parse(
            r#"<table><tr><td>
                 <div class="dexter-FlexContainer-Items"><p>a</p><p>b</p></div>
               </td></tr></table>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);

        let summary = guess_columns(&body, &roles).unwrap();
        assert_eq!(summary.columns, 0);
        assert_eq!(summary.skipped, 1);
        assert_eq!(dom::Selection::from(body).select("table").length(), 1);
    }
}
