//! Video normalization
//!
//! Desktop videos become a plain link to their source file; mobile and other
//! variants are dropped since they duplicate the desktop one.

use crate::dom::{self, NodeRef};
use crate::selector::{Role, RoleMap};
use crate::url_utils;
use url::Url;

const DESKTOP_VIDEO_CLASS: &str = "video-desktop";

/// Rewrite `<video class="video-desktop">` into `<a href=SRC>SRC</a>` and
/// remove every other video.
///
/// A desktop video without a usable `<source>` is left untouched.
/// Returns the number of links created.
pub fn normalize_videos<'a>(body: &NodeRef<'a>, roles: &RoleMap, origin: Option<&Url>) -> usize {
    let mut linked = 0;
    for video in roles.find_all(body, Role::Video) {
        if !dom::has_class(&video, DESKTOP_VIDEO_CLASS) {
            dom::detach(&video);
            continue;
        }

        let Some(src) = dom::select_first(&video, "source")
            .and_then(|source| dom::non_empty_attr(&source, "src"))
        else {
            tracing::debug!("desktop video without source left in place");
            continue;
        };

        let href = url_utils::resolve_media_src(&src, origin);
        let link = dom::new_element_with_text(&video, "a", &href);
        dom::set_attr(&link, "href", &href);
        dom::replace(&video, &link);
        linked += 1;
    }
    linked
}
