//! Page metadata from document-level tags.
//!
//! Reads the page title, the Open Graph description and the Open Graph image.
//! The first matching tag wins for each field; empty values count as absent.

use crate::dom::{self, Document, NodeRef};
use crate::result::PageMetadata;
use regex::Regex;
use std::sync::LazyLock;

/// Newlines and tabs inside `<title>` come from source formatting only
#[allow(clippy::expect_used)]
static TITLE_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\t]").expect("valid regex"));

/// Extract title, description and image from the document head.
#[must_use]
pub fn extract_page_metadata(doc: &Document) -> PageMetadata {
    PageMetadata {
        title: first_node(doc, "title")
            .map(|title| TITLE_NOISE.replace_all(&dom::text_content(&title), "").trim().to_string())
            .filter(|t| !t.is_empty()),
        description: meta_property(doc, "og:description"),
        image: meta_property(doc, "og:image"),
    }
}

fn first_node<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().copied()
}

/// `content` of the first `[property=...]` tag, if non-empty
fn meta_property(doc: &Document, property: &str) -> Option<String> {
    first_node(doc, &format!(r#"[property="{property}"]"#))
        .and_then(|meta| dom::non_empty_attr(&meta, "content"))
}
