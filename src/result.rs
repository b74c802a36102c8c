//! Result types for import output.
//!
//! The transformed tree travels with its derived output path and the side
//! report of everything that was cut out of the page.

use crate::dom::{self, Document};
use serde::{Deserialize, Serialize};

/// Side report of widgets removed from the page.
///
/// Entries are `None` when the removed node carried no identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Experience fragment ids (`id`, else `data-personalization`).
    pub extracted_widget_ids: Vec<Option<String>>,

    /// Form ids (`id` only).
    pub extracted_form_ids: Vec<Option<String>>,
}

/// Page-level metadata read from the document head.
///
/// Fields are `None` when the tag is absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// `<title>` text, newlines and tabs removed.
    pub title: Option<String>,

    /// `og:description` content.
    pub description: Option<String>,

    /// `og:image` content.
    pub image: Option<String>,
}

impl PageMetadata {
    /// True when no field was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image.is_none()
    }
}

/// Result of importing one page.
pub struct ImportResult {
    /// The transformed document. Its body is the converted content.
    pub document: Document,

    /// Output path derived from the page URL (`/a/b/page.html` → `/a/b/page`).
    pub output_path: String,

    /// Removed widget identifiers.
    pub report: Report,

    /// Metadata read from the document head.
    pub metadata: PageMetadata,

    /// Non-fatal issues met during the import, such as unmapped icons or
    /// tab lists whose header count differs from their panel count.
    pub warnings: Vec<String>,
}

impl ImportResult {
    /// Serialized inner HTML of the transformed body.
    #[must_use]
    pub fn html(&self) -> String {
        dom::body(&self.document)
            .map(|b| dom::inner_html(&b).to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for ImportResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportResult")
            .field("output_path", &self.output_path)
            .field("report", &self.report)
            .field("metadata", &self.metadata)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_null_ids() {
        let report = Report {
            extracted_widget_ids: vec![None],
            extracted_form_ids: vec![Some("contact".to_string())],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"extractedWidgetIds":[null],"extractedFormIds":["contact"]}"#
        );
    }

    #[test]
    fn test_page_metadata_is_empty() {
        assert!(PageMetadata::default().is_empty());
        let meta = PageMetadata {
            title: Some("Foo".to_string()),
            ..PageMetadata::default()
        };
        assert!(!meta.is_empty());
    }
}
