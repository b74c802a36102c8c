//! Tab-Group Synthesizer
//!
//! A tab group is exported as a grouping container whose first child holds
//! the `<con-tablist>` and whose following children are the panels, one per
//! tab header:
//!
//! ```html
//! <div class="dexter-FlexContainer-Items">
//!   <div><con-tablist><b role="tab">A</b><b role="tab">B</b></con-tablist></div>
//!   <div>panel A</div>
//!   <div>panel B</div>
//! </div>
//! ```
//!
//! The container becomes a `Tabs` block listing the tab names, followed by
//! one section per tab: a separator, the untouched panel and a
//! `Section Metadata` block naming the tab.

use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::importer::blocks::{self, BlockTable, Cell, ClassifiedBlock, Shape};
use crate::selector::{self, Role, RoleMap};

/// Outcome of synthesizing one tab group.
#[derive(Debug)]
pub struct TabGroup<'a> {
    /// The `Tabs` table now standing where the container was.
    pub table: NodeRef<'a>,
    /// Synthesized sections, in tab order, following the table.
    pub sections: Vec<NodeRef<'a>>,
    /// Tab names, in header order.
    pub names: Vec<String>,
}

/// Classify the tab group a tab list belongs to.
///
/// The cells are the panels: every element child of the enclosing grouping
/// container after the first. Returns a `Skip` block when the tab list has
/// no enclosing container or already sits inside a block.
#[must_use]
pub fn classify_tab_group<'a>(tablist: &NodeRef<'a>, roles: &RoleMap) -> ClassifiedBlock<'a> {
    if selector::is_inside_table(tablist) {
        return ClassifiedBlock::skip(*tablist);
    }
    let Some(container) = selector::closest_with_role(tablist, roles, Role::GroupingContainer) else {
        return ClassifiedBlock::skip(*tablist);
    };
    ClassifiedBlock {
        shape: Shape::TabGroup,
        source: container,
        title: None,
        cells: dom::element_children(&container).into_iter().skip(1).collect(),
    }
}

/// Tab header texts of a tab list, in document order.
#[must_use]
pub fn tab_names(tablist: &NodeRef, roles: &RoleMap) -> Vec<String> {
    roles
        .find_all(tablist, Role::TabHeader)
        .iter()
        .map(|header| dom::text_content(header).trim().to_string())
        .collect()
}

/// Rewrite one classified tab group.
///
/// Header *i* pairs with panel *i*. When the counts differ, pairs are formed
/// up to the shorter length: headers without a panel are still listed in the
/// `Tabs` block, panels without a header follow the last section unlabelled.
///
/// # Errors
/// Only on an internal block-building defect.
pub fn build_tab_group<'a>(
    block: &ClassifiedBlock<'a>,
    names: Vec<String>,
    warnings: &mut Vec<String>,
) -> Result<TabGroup<'a>> {
    let container = block.source;
    let panels = &block.cells;

    if names.len() != panels.len() {
        let msg = format!(
            "tab list has {} headers but {} panels; pairing the first {}",
            names.len(),
            panels.len(),
            names.len().min(panels.len())
        );
        tracing::warn!("{msg}");
        warnings.push(msg);
    }

    let list = dom::new_element(&container, "ol");
    for name in &names {
        let li = dom::new_element_with_text(&container, "li", name);
        dom::append(&list, &li);
    }

    let mut sections = Vec::with_capacity(panels.len());
    for (name, panel) in names.iter().zip(panels) {
        let section = dom::new_element(&container, "div");
        dom::append(&section, &dom::new_element(&container, "hr"));
        dom::append(&section, panel);
        BlockTable::new(blocks::SECTION_METADATA)
            .key_value("tab", name.as_str())
            .append_to(&section)?;
        sections.push(section);
    }
    let orphans: Vec<NodeRef<'a>> = panels.iter().skip(names.len()).copied().collect();

    let table = BlockTable::new(blocks::TABS)
        .row(vec![Cell::Node(list)])
        .replace(&container)?;

    let mut cursor = table;
    for node in sections.iter().chain(&orphans) {
        dom::insert_after(&cursor, node);
        cursor = *node;
    }

    Ok(TabGroup {
        table,
        sections,
        names,
    })
}

/// Convert every tab list under `body` into a `Tabs` block plus sections.
///
/// Tab lists without an enclosing grouping container, or already inside a
/// block, are reported and left untouched. Returns the number of groups converted.
///
/// # Errors
/// Only on an internal block-building defect.
pub fn synthesize_tabs<'a>(body: &NodeRef<'a>, roles: &RoleMap, warnings: &mut Vec<String>) -> Result<usize> {
    let mut converted = 0;
    for tablist in roles.find_all(body, Role::TabList) {
        if !dom::is_within(&tablist, body) {
            continue;
        }
        let block = classify_tab_group(&tablist, roles);
        if block.shape == Shape::Skip {
            let msg = if selector::is_inside_table(&tablist) {
                "tab list inside an existing block left untouched"
            } else {
                "tab list without enclosing container left untouched"
            };
            tracing::warn!("{msg}");
            warnings.push(msg.to_string());
            continue;
        }
        let names = tab_names(&tablist, roles);
        let group = build_tab_group(&block, names, warnings)?;
        tracing::debug!(
            tabs = group.names.len(),
            sections = group.sections.len(),
            "built tab group"
        );
        converted += 1;
    }
    tracing::debug!(groups = converted, "synthesized tab groups");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::blocks::table_texts;

    const TWO_TABS: &str = r#"
        <main>
          <div class="dexter-FlexContainer-Items" id="group">
            <div><con-tablist><b role="tab">A</b><b role="tab">B</b></con-tablist></div>
            <div id="pa">panel A</div>
            <div id="pb">panel B</div>
          </div>
          <p id="after">after</p>
        </main>
    "#;

    #[test]
    fn test_tab_pairing() {
        let doc = dom::parse(TWO_TABS);
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        let mut warnings = Vec::new();

        assert_eq!(synthesize_tabs(&body, &roles, &mut warnings).unwrap(), 1);
        assert!(warnings.is_empty());
        assert!(dom::select_first(&body, "#group").is_none());

        let main = dom::select_first(&body, "main").unwrap();
        let children = dom::element_children(&main);
        let tags: Vec<_> = children.iter().filter_map(dom::tag_name).collect();
        assert_eq!(tags, vec!["table", "div", "div", "p"]);

        let tabs = &children[0];
        assert_eq!(table_texts(tabs)[0], vec!["Tabs"]);
        let items: Vec<_> = dom::Selection::from(*tabs)
            .select("ol > li")
            .nodes()
            .iter()
            .map(|li| dom::text_content(li).to_string())
            .collect();
        assert_eq!(items, vec!["A", "B"]);

        for (section, (name, panel)) in children[1..3].iter().zip([("A", "#pa"), ("B", "#pb")]) {
            let parts = dom::element_children(section);
            assert_eq!(dom::tag_name(&parts[0]).as_deref(), Some("hr"));
            assert!(dom::select_first(section, panel).is_some());
            assert_eq!(
                table_texts(&parts[2]),
                vec![vec!["Section Metadata".to_string()], vec!["tab".to_string(), name.to_string()]]
            );
        }
    }

    #[test]
    fn test_more_panels_than_headers() {
        let doc = dom::parse(
            r#"<main><div class="dexter-FlexContainer-Items">
                 <con-tablist><b role="tab">Only</b></con-tablist>
                 <div id="p1">one</div><div id="p2">two</div>
               </div></main>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        let mut warnings = Vec::new();

        synthesize_tabs(&body, &roles, &mut warnings).unwrap();
        assert_eq!(warnings.len(), 1);

        let main = dom::select_first(&body, "main").unwrap();
        let children = dom::element_children(&main);
        assert_eq!(children.len(), 3);
        assert!(dom::select_first(&children[1], "#p1").is_some());
        assert_eq!(dom::attr(&children[2], "id").as_deref(), Some("p2"));
    }

    #[test]
    fn test_more_headers_than_panels() {
        let doc = dom::parse(
            r#"<div class="dexter-FlexContainer-Items">
                 <con-tablist><b role="tab">A</b><b role="tab">B</b></con-tablist>
                 <div>only panel</div>
               </div>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        let mut warnings = Vec::new();

        synthesize_tabs(&body, &roles, &mut warnings).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(dom::Selection::from(body).select("ol > li").length(), 2);
        assert_eq!(dom::Selection::from(body).select("table").length(), 2);
    }

    #[test]
    fn test_tablist_without_container_is_untouched() {
        let doc = dom::parse(r#"<div><con-tablist><b role="tab">A</b></con-tablist><div>p</div></div>"#);
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        let mut warnings = Vec::new();

        assert_eq!(synthesize_tabs(&body, &roles, &mut warnings).unwrap(), 0);
        assert_eq!(warnings.len(), 1);
        assert!(dom::select_first(&body, "con-tablist").is_some());
        assert!(dom::select_first(&body, "table").is_none());
    }

    #[test]
    fn test_tablist_inside_table_is_reported_as_such() {
        let doc = dom::parse(
            r#"<table><tr><td><div class="dexter-FlexContainer-Items">
                 <con-tablist><b role="tab">A</b></con-tablist><div>p</div>
               </div></td></tr></table>"#,
        );
        let body = dom::body(&doc).unwrap();
        let roles = RoleMap::build(&body);
        let mut warnings = Vec::new();

        assert_eq!(synthesize_tabs(&body, &roles, &mut warnings).unwrap(), 0);
        assert_eq!(warnings, vec!["tab list inside an existing block left untouched"]);
        assert!(dom::select_first(&body, "con-tablist").is_some());
    }
}
