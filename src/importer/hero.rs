//! Hero Promoter
//!
//! Makes sure the page starts with exactly one primary heading, pulls the
//! region's leading picture right under it, and closes the hero region with a
//! separator.

use crate::dom::{self, NodeRef};
use crate::importer::blocks::{ClassifiedBlock, Shape};
use crate::selector::{self, Role, RoleMap};

/// Promote, pair and separate the hero heading.
///
/// 1. Without an `<h1>`, the first `<h2>` is renamed to `<h1>` in place.
/// 2. The heading's closest content region is looked up; its first picture
///    is moved to sit right after the heading, unless that picture holds
///    the heading itself.
/// 3. An `<hr>` is inserted right after that region.
///
/// Returns `None` when the page has no heading at all. A heading outside any
/// content region is promoted but gets neither media nor separator.
pub fn promote_hero<'a>(body: &NodeRef<'a>, roles: &mut RoleMap) -> Option<ClassifiedBlock<'a>> {
    let heading = match roles.find_first(body, Role::PrimaryHeading) {
        Some(h1) => h1,
        None => {
            let h2 = roles.find_first(body, Role::SecondaryHeading)?;
            dom::rename(&h2, "h1");
            roles.revoke(&h2, Role::SecondaryHeading);
            roles.assign(&h2, Role::PrimaryHeading);
            tracing::debug!("promoted first h2 to h1");
            h2
        }
    };

    let mut block = ClassifiedBlock {
        shape: Shape::Hero,
        source: heading,
        title: None,
        cells: vec![heading],
    };

    let Some(region) = selector::closest_with_role(&heading, roles, Role::ContentRegion) else {
        tracing::debug!("hero heading has no content region");
        return Some(block);
    };

    match roles.find_first(&region, Role::Media) {
        // Moving a picture after a heading it contains would detach both
        Some(media) if dom::is_within(&heading, &media) => {
            tracing::debug!("hero heading sits inside the region's picture; media left in place");
        }
        Some(media) => {
            dom::insert_after(&heading, &media);
            block.cells.push(media);
        }
        None => {}
    }

    let separator = dom::new_element(&region, "hr");
    dom::insert_after(&region, &separator);

    Some(block)
}
