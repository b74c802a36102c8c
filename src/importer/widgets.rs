//! Embedded-Widget Extractor
//!
//! Experience fragments and forms cannot be expressed as page content. They
//! are cut out before container classification, so the wrappers they leave
//! behind are not mistaken for layout, and their identifiers go to the report.

use crate::dom::{self, NodeRef};
use crate::selector::{self, Role, RoleMap};

/// Identifiers collected while removing widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedWidgets {
    /// Experience fragment ids, in document order.
    pub widget_ids: Vec<Option<String>>,
    /// Form ids, in document order.
    pub form_ids: Vec<Option<String>>,
}

/// Remove every experience fragment, recording `id` or, failing that,
/// `data-personalization`.
pub fn extract_personalization<'a>(body: &NodeRef<'a>, roles: &RoleMap) -> Vec<Option<String>> {
    roles
        .find_all(body, Role::PersonalizationWidget)
        .into_iter()
        .map(|fragment| {
            let id = dom::non_empty_attr(&fragment, "id")
                .or_else(|| dom::non_empty_attr(&fragment, "data-personalization"));
            dom::detach(&fragment);
            id
        })
        .collect()
}

/// Remove every form, recording its `id`.
///
/// A form inside a content region takes the whole region with it so no empty
/// wrapper is left behind.
pub fn extract_forms<'a>(body: &NodeRef<'a>, roles: &RoleMap) -> Vec<Option<String>> {
    roles
        .find_all(body, Role::FormWidget)
        .into_iter()
        .map(|form| {
            let id = dom::non_empty_attr(&form, "id");
            match selector::closest_with_role(&form, roles, Role::ContentRegion) {
                Some(region) => dom::detach(&region),
                None => dom::detach(&form),
            }
            id
        })
        .collect()
}

/// Run both extractions, fragments first.
pub fn extract_widgets<'a>(body: &NodeRef<'a>, roles: &RoleMap) -> ExtractedWidgets {
    let widget_ids = extract_personalization(body, roles);
    let form_ids = extract_forms(body, roles);
    tracing::debug!(
        fragments = widget_ids.len(),
        forms = form_ids.len(),
        "extracted embedded widgets"
    );
    ExtractedWidgets {
        widget_ids,
        form_ids,
    }
}
