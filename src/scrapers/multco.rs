//! Multnomah County wood burning status ("Can I Burn Today?").
//!
//! The county page has been redesigned several times, but the heading text
//! has stayed put. The adapter anchors on that heading and then falls back
//! through progressively looser searches:
//!
//! 1. Up to two substantial blocks following the heading's container.
//! 2. The first later element mentioning a burn keyword.
//! 3. Anywhere in the document, text matching a known status phrase.
//!
//! If none of those produce anything the status is "Unavailable".

use super::UNAVAILABLE;
use super::dom::{AdapterError, element_text, is_hidden_container, parse_selector};
use crate::utils::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

pub const ADAPTER_NAME: &str = "multco-wood-burning";

const ANCHOR_PHRASE: &str = "Can I Burn Today?";
const ANCHOR_CANDIDATES: &str = "h2, h3, h4, strong, b";

/// Sibling blocks shorter than this (in chars) are decoration, not status.
const MIN_BLOCK_CHARS: usize = 10;
const MAX_SIBLING_BLOCKS: usize = 2;
const MAX_STATUS_CHARS: usize = 500;

static STATUS_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(No Restrictions|Limit burning|burning restriction)")
        .expect("status phrase pattern is valid")
});

/// Extract the current burn status.
pub fn multco_wood_burning(html: &str) -> Result<String, AdapterError> {
    let document = Html::parse_document(html);
    let candidates = parse_selector(ANCHOR_CANDIDATES)?;

    // Only the first heading that mentions the phrase is considered.
    let anchor = document
        .select(&candidates)
        .find(|el| is_anchor(&element_text(*el, "")));

    if let Some(anchor) = anchor {
        if let Some(status) = following_blocks(anchor) {
            debug!("Burn status from blocks after anchor");
            return Ok(status);
        }
        if let Some(status) = next_keyword_element(&document, anchor) {
            debug!("Burn status from keyword scan after anchor");
            return Ok(status);
        }
    }

    if let Some(status) = status_phrase_anywhere(&document) {
        debug!("Burn status from document-wide phrase match");
        return Ok(status);
    }

    Ok(UNAVAILABLE.to_string())
}

fn is_anchor(text: &str) -> bool {
    text.contains(ANCHOR_PHRASE) || text.to_lowercase().contains(&ANCHOR_PHRASE.to_lowercase())
}

fn mentions_burn_keyword(text: &str) -> bool {
    text.contains("Restriction")
        || text.to_lowercase().contains("burn")
        || text.contains("Limit")
        || text.contains("No ")
}

/// Text of the first elements after the anchor's container, skipping short ones.
fn following_blocks(anchor: ElementRef<'_>) -> Option<String> {
    let container = anchor.parent().and_then(ElementRef::wrap)?;
    let parts: Vec<String> = container
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .map(|sibling| element_text(sibling, " "))
        .filter(|text| text.chars().count() > MIN_BLOCK_CHARS)
        .take(MAX_SIBLING_BLOCKS)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// First element after the anchor, in document order, whose text has a burn keyword.
///
/// Includes the anchor's own descendants. The walk is a pre-order traversal
/// of the tree, so it ends at the end of the document.
fn next_keyword_element(document: &Html, anchor: ElementRef<'_>) -> Option<String> {
    document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != anchor.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .map(|el| element_text(el, " "))
        .find(|text| mentions_burn_keyword(text))
        .map(|text| truncate_chars(&text, MAX_STATUS_CHARS))
}

/// The container of the first visible text node matching [`STATUS_PHRASE`].
fn status_phrase_anywhere(document: &Html) -> Option<String> {
    document
        .tree
        .root()
        .descendants()
        .find_map(|node| {
            let text = node.value().as_text()?;
            let parent = node.parent()?;
            if is_hidden_container(parent.value().as_element()) || !STATUS_PHRASE.is_match(text) {
                return None;
            }
            ElementRef::wrap(parent)
        })
        .map(|container| truncate_chars(&element_text(container, " "), MAX_STATUS_CHARS))
}
