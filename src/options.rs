//! Configuration options for a page import.
//!
//! The `Options` struct is the configuration bag handed to the pipeline
//! alongside the document and its URL.

/// Selectors for site chrome removed before any block detection.
pub const DEFAULT_CHROME_SELECTORS: &[&str] = &[
    "header",
    ".globalnavheader",
    ".globalNavHeader",
    ".globalnavfooter",
    ".globalNavFooter",
    ".modalContainer",
    ".drawerContainer",
    "style",
];

/// Configuration options for a page import.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_block_importer::Options;
///
/// let options = Options {
///     original_url: Some("https://www.example.com/products/page.html".to_string()),
///     include_metadata: false,
///     ..Options::default()
/// };
/// assert!(options.replace_icons);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the page on the original site.
    ///
    /// Only its origin is used, to resolve relative video sources.
    /// When unset, the origin of the page URL passed to the import is used.
    ///
    /// Default: `None`
    pub original_url: Option<String>,

    /// CSS selectors for header/footer/navigation chrome to drop.
    ///
    /// Default: [`DEFAULT_CHROME_SELECTORS`]
    pub chrome_selectors: Vec<String>,

    /// Replace known icon images by `:symbol:` spans.
    ///
    /// Default: `true`
    pub replace_icons: bool,

    /// Extra `(filename, symbol)` pairs consulted before the built-in icon table.
    ///
    /// Default: empty
    pub extra_icons: Vec<(String, String)>,

    /// Remove experience fragments and forms, listing their ids in the report.
    ///
    /// Default: `true`
    pub extract_widgets: bool,

    /// Append the Metadata block built from the document head.
    ///
    /// Default: `true`
    pub include_metadata: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            original_url: None,
            chrome_selectors: DEFAULT_CHROME_SELECTORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            replace_icons: true,
            extra_icons: Vec::new(),
            extract_widgets: true,
            include_metadata: true,
        }
    }
}
