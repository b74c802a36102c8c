//! Import pipeline.
//!
//! Fixed stage order: chrome removal → role pre-pass → hero promotion →
//! widget extraction → video normalization → icon substitution → tab
//! synthesis → container classification → metadata block.
//!
//! Widgets are removed before classification so the regions they leave do
//! not show up as spurious containers, and tab groups are converted before
//! classification so their containers are no longer there to be matched.

use crate::dom::{self, Document};
use crate::error::Result;
use crate::options::Options;
use crate::result::{PageMetadata, Report};
use crate::selector::RoleMap;
use url::Url;

use super::{chrome, columns, hero, icons, metadata_block, tabs, videos, widgets};

/// Side outputs of one transform.
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    pub report: Report,
    pub warnings: Vec<String>,
    pub columns: columns::ColumnsSummary,
    pub tab_groups: usize,
}

/// Run every stage over the body of `doc`.
///
/// `origin` resolves relative video sources. A document without a body is
/// left as is with a warning.
///
/// # Errors
/// Only on an internal block-building defect; malformed or unexpected markup
/// degrades to untouched regions instead.
pub fn transform(
    doc: &Document,
    origin: Option<&Url>,
    meta: &PageMetadata,
    opts: &Options,
) -> Result<TransformOutcome> {
    let mut outcome = TransformOutcome::default();
    let Some(body) = dom::body(doc) else {
        outcome.warnings.push("document has no body".to_string());
        return Ok(outcome);
    };

    for selector in chrome::remove_chrome(&body, &opts.chrome_selectors) {
        outcome.warnings.push(format!("invalid chrome selector: {selector}"));
    }

    let mut roles = RoleMap::build(&body);
    tracing::debug!(nodes = roles.len(), "assigned structural roles");

    if hero::promote_hero(&body, &mut roles).is_none() {
        tracing::debug!("no hero heading found");
    }

    if opts.extract_widgets {
        let extracted = widgets::extract_widgets(&body, &roles);
        outcome.report = Report {
            extracted_widget_ids: extracted.widget_ids,
            extracted_form_ids: extracted.form_ids,
        };
    }

    let linked = videos::normalize_videos(&body, &roles, origin);
    tracing::debug!(linked, "normalized videos");

    if opts.replace_icons {
        for src in icons::replace_icons(&body, &roles, &opts.extra_icons) {
            outcome.warnings.push(format!("no mapping found for icon {src}"));
        }
    }

    outcome.tab_groups = tabs::synthesize_tabs(&body, &roles, &mut outcome.warnings)?;
    outcome.columns = columns::guess_columns(&body, &roles)?;

    if opts.include_metadata {
        metadata_block::append_metadata_block(&body, meta)?;
    }

    Ok(outcome)
}
