//! Metadata Block Builder
//!
//! Turns the page metadata into the `Metadata` key/value block, appended as
//! the very last child of the body once every other stage has run.

use crate::dom::{self, NodeRef};
use crate::error::Result;
use crate::importer::blocks::{self, BlockTable};
use crate::result::PageMetadata;

/// Append the `Metadata` block, one row per present field.
///
/// Returns `None` without touching the tree when no field is present.
///
/// # Errors
/// Only on an internal block-building defect.
pub fn append_metadata_block<'a>(body: &NodeRef<'a>, meta: &PageMetadata) -> Result<Option<NodeRef<'a>>> {
    if meta.is_empty() {
        return Ok(None);
    }

    let mut table = BlockTable::new(blocks::METADATA);
    if let Some(title) = &meta.title {
        table = table.key_value("Title", title.as_str());
    }
    if let Some(description) = &meta.description {
        table = table.key_value("Description", description.as_str());
    }
    if let Some(image) = &meta.image {
        let img = dom::new_element(body, "img");
        dom::set_attr(&img, "src", image);
        table = table.key_value("Image", img);
    }

    table.append_to(body).map(Some)
}
