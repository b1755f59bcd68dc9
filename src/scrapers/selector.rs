//! Generic CSS-selector extraction.
//!
//! Used for any source that names a `selector` instead of an adapter. The
//! first matching element's normalized text is the status.

use super::UNAVAILABLE;
use super::dom::{element_text, parse_selector};
use scraper::Html;
use tracing::{debug, warn};

/// Extract the text of the first element matching `selector`.
///
/// Returns [`UNAVAILABLE`] when nothing matches, the match has no text, or
/// the selector itself does not compile. Never fails: the HTML parser is
/// lenient and accepts any input.
pub fn extract_with_selector(html: &str, selector: &str) -> String {
    let selector_ref = match parse_selector(selector) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "Unusable selector");
            return UNAVAILABLE.to_string();
        }
    };

    let document = Html::parse_document(html);
    let Some(element) = document.select(&selector_ref).next() else {
        debug!(%selector, "Selector matched nothing");
        return UNAVAILABLE.to_string();
    };

    let text = element_text(element, " ");
    if text.is_empty() {
        UNAVAILABLE.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_class_selector() {
        let html = r#"<div class="status">Clear</div>"#;
        assert_eq!(extract_with_selector(html, ".status"), "Clear");
    }

    #[test]
    fn test_extract_missing_selector() {
        let html = r#"<div class="status">Clear</div>"#;
        assert_eq!(extract_with_selector(html, ".missing"), UNAVAILABLE);
    }

    #[test]
    fn test_extract_first_match_wins() {
        let html = r#"
            <ul id="alerts">
              <li data-level="low">  Stage 1:
                 <em>voluntary</em> </li>
              <li data-level="high">Stage 2</li>
            </ul>"#;
        assert_eq!(extract_with_selector(html, "#alerts > li"), "Stage 1: voluntary");
        assert_eq!(
            extract_with_selector(html, "ul li[data-level=high]"),
            "Stage 2"
        );
    }

    #[test]
    fn test_extract_empty_element_is_unavailable() {
        let html = r#"<div class="status">   <span></span> </div>"#;
        assert_eq!(extract_with_selector(html, ".status"), UNAVAILABLE);
    }

    #[test]
    fn test_extract_malformed_html_does_not_fail() {
        let html = "<div class=status><p>Open<div><b>unclosed";
        assert_eq!(extract_with_selector(html, "div.status"), "Open unclosed");
    }

    #[test]
    fn test_extract_invalid_selector_is_unavailable() {
        assert_eq!(extract_with_selector("<p>x</p>", "p[[["), UNAVAILABLE);
    }
}
