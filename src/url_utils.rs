//! URL Utility Functions
//!
//! Output path derivation from the page URL, origin lookup, and resolution of
//! media references against the original site.

use crate::error::{Error, Result};
use url::Url;

/// Parse the page URL, mapping failures to [`Error::InvalidUrl`].
///
/// # Errors
/// Returns `Error::InvalidUrl` when `url` is not an absolute URL.
pub fn parse_page_url(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))
}

/// Derive the document output path from a page URL.
///
/// Strips a trailing `.html`/`.htm` extension, then a trailing `/index`
/// segment, then a trailing slash. The site root maps to `/index`.
///
/// # Examples
///
/// ```
/// use rs_block_importer::url_utils::output_path;
///
/// assert_eq!(output_path("https://x.com/products/photoshop.html").unwrap(), "/products/photoshop");
/// assert_eq!(output_path("https://x.com/products/index.html").unwrap(), "/products");
/// assert_eq!(output_path("https://x.com/").unwrap(), "/index");
/// ```
///
/// # Errors
/// Returns `Error::InvalidUrl` when `url` does not parse.
pub fn output_path(url: &str) -> Result<String> {
    let parsed = parse_page_url(url)?;
    Ok(path_from_pathname(parsed.path()))
}

fn path_from_pathname(pathname: &str) -> String {
    let mut path = pathname;
    for ext in [".html", ".htm"] {
        if let Some(stripped) = path.strip_suffix(ext) {
            path = stripped;
            break;
        }
    }
    path = path.strip_suffix("/index").unwrap_or(path);
    path = path.trim_end_matches('/');

    if path.is_empty() {
        "/index".to_string()
    } else {
        path.to_string()
    }
}

/// Origin (`scheme://host[:port]`) of a URL, `None` for opaque or invalid URLs.
#[must_use]
pub fn origin_of(url: &str) -> Option<Url> {
    let parsed = Url::parse(url.trim()).ok()?;
    if !parsed.origin().is_tuple() {
        return None;
    }
    Url::parse(&parsed.origin().ascii_serialization()).ok()
}

/// Resolve a media `src` against the original site's origin.
///
/// Absolute sources are returned unchanged; without an origin a relative
/// source is returned as is.
#[must_use]
pub fn resolve_media_src(src: &str, origin: Option<&Url>) -> String {
    let src = src.trim();
    if Url::parse(src).is_ok() {
        return src.to_string();
    }
    match origin {
        Some(base) => base
            .join(src)
            .map_or_else(|_| src.to_string(), |u| u.to_string()),
        None => src.to_string(),
    }
}

/// Last path segment of a URL or path, without query string or fragment.
#[must_use]
pub fn file_name(src: &str) -> &str {
    let end = src.find(['?', '#']).unwrap_or(src.len());
    let path = &src[..end];
    path.rsplit('/').next().unwrap_or(path)
}
