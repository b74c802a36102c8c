//! Site chrome removal (global header/footer, modals, drawers, inline styles).

use crate::dom::{self, NodeRef};

/// Remove every element under `body` matching one of `selectors`.
///
/// Unparsable selectors are skipped with a warning; returns them.
pub fn remove_chrome(body: &NodeRef, selectors: &[String]) -> Vec<String> {
    let mut rejected = Vec::new();
    for selector in selectors {
        if !dom::remove_matching(body, selector) {
            tracing::warn!(selector = %selector, "invalid chrome selector skipped");
            rejected.push(selector.clone());
        }
    }
    rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_CHROME_SELECTORS;

    #[test]
    fn test_remove_default_chrome() {
        let doc = dom::parse(
            r#"<header>nav</header>
               <div class="globalNavHeader">x</div>
               <style>p{}</style>
               <main><p>kept</p></main>
               <div class="globalnavfooter">y</div>
               <div class="modalContainer"></div>"#,
        );
        let body = dom::body(&doc).unwrap();
        let selectors: Vec<String> = DEFAULT_CHROME_SELECTORS.iter().map(|s| (*s).to_string()).collect();

        assert!(remove_chrome(&body, &selectors).is_empty());
        let tags: Vec<_> = dom::element_children(&body)
            .iter()
            .filter_map(dom::tag_name)
            .collect();
        assert_eq!(tags, vec!["main"]);
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let doc = dom::parse("<header></header>");
        let body = dom::body(&doc).unwrap();
        let rejected = remove_chrome(&body, &["header".to_string(), "[[".to_string()]);
        assert_eq!(rejected, vec!["[["]);
        assert!(dom::select_first(&body, "header").is_none());
    }
}
