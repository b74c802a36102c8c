//! # rs-block-importer
//!
//! Rewrites pages exported from a content-management system into a small set
//! of canonical block tables (hero, tabs, columns, metadata) ready for
//! conversion into a structured document format.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_block_importer::import;
//!
//! let html = r#"<html><head><title>Photoshop</title></head><body>
//!   <div class="dexter-FlexContainer-Items"><p>Edit</p><p>Paint</p></div>
//! </body></html>"#;
//!
//! let result = import(html, "https://www.example.com/products/photoshop.html")?;
//! assert_eq!(result.output_path, "/products/photoshop");
//! assert!(result.html().contains("Columns"));
//! # Ok::<(), rs_block_importer::Error>(())
//! ```
//!
//! ## Stages
//!
//! - **Chrome removal**: global header, footer, modals, inline styles
//! - **Hero**: one primary heading, paired with the region's picture
//! - **Widgets**: experience fragments and forms cut out and reported
//! - **Videos and icons**: desktop videos become links, icons become `:symbol:`
//! - **Tabs**: tab lists become a `Tabs` block plus one section per tab
//! - **Columns**: outermost multi-child flex containers become `Columns` blocks
//! - **Metadata**: title, description and image appended as a `Metadata` block
//!
//! Malformed or unexpected markup never fails an import; the affected region
//! is left untouched and, where useful, a warning is recorded.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Node predicates and the structural role pre-pass.
pub mod selector;

/// Import stages and their orchestration.
pub mod importer;

/// Page metadata from document-level tags.
pub mod metadata;

/// Output path derivation and media URL resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_CHROME_SELECTORS};
pub use result::{ImportResult, PageMetadata, Report};

/// Imports a page using default options.
///
/// # Arguments
///
/// * `html` - The exported page as a string slice
/// * `url` - The page URL, used to derive the output path
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `url` is not an absolute URL.
pub fn import(html: &str, url: &str) -> Result<ImportResult> {
    import_with_options(html, url, &Options::default())
}

/// Imports a page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_block_importer::{import_with_options, Options};
///
/// let html = r#"<body><form id="contact"></form><div class="xf"></div></body>"#;
/// let options = Options {
///     original_url: Some("https://www.example.com/".to_string()),
///     ..Options::default()
/// };
/// let result = import_with_options(html, "https://new.example.com/contact.html", &options)?;
/// assert_eq!(result.report.extracted_form_ids, vec![Some("contact".to_string())]);
/// assert_eq!(result.report.extracted_widget_ids, vec![None]);
/// # Ok::<(), rs_block_importer::Error>(())
/// ```
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `url` is not an absolute URL.
pub fn import_with_options(html: &str, url: &str, options: &Options) -> Result<ImportResult> {
    let output_path = url_utils::output_path(url)?;

    let mut warnings = Vec::new();
    let origin = match options.original_url.as_deref() {
        Some(original) => url_utils::origin_of(original).or_else(|| {
            warnings.push(format!("original URL {original} has no origin; using the page URL"));
            url_utils::origin_of(url)
        }),
        None => url_utils::origin_of(url),
    };

    let document = dom::parse(html);
    let metadata = metadata::extract_page_metadata(&document);
    let outcome = importer::transform(&document, origin.as_ref(), &metadata, options)?;
    warnings.extend(outcome.warnings);

    tracing::info!(
        path = %output_path,
        tables = document.select("table").length(),
        warnings = warnings.len(),
        "imported page"
    );

    Ok(ImportResult {
        document,
        output_path,
        report: outcome.report,
        metadata,
        warnings,
    })
}

/// Imports a page from raw bytes with automatic encoding detection.
///
/// # Example
///
/// ```rust
/// use rs_block_importer::{import_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = import_bytes(html, "https://www.example.com/cafe.html", &Options::default())?;
/// assert!(result.html().contains("Café"));
/// # Ok::<(), rs_block_importer::Error>(())
/// ```
///
/// # Errors
///
/// Returns `Error::InvalidUrl` when `url` is not an absolute URL.
pub fn import_bytes(html: &[u8], url: &str, options: &Options) -> Result<ImportResult> {
    let html_str = encoding::transcode_to_utf8(html);
    import_with_options(&html_str, url, options)
}
