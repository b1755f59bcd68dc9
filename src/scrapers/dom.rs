//! DOM helpers shared by the generic extractor and the named adapters.
//!
//! Text normalization mirrors what a reader sees: every visible descendant
//! text node is trimmed, empty pieces are dropped, and the rest are joined
//! with a separator. Text inside `<script>`, `<style>`, and `<template>`
//! never contributes. `<noscript>` fallback text does.

use scraper::node::Element;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Failure inside an adapter's parsing steps.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

/// Compile a CSS selector, reporting failures as [`AdapterError`].
pub fn parse_selector(selector: &str) -> Result<Selector, AdapterError> {
    Selector::parse(selector).map_err(|e| AdapterError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Whether text directly inside `parent` is hidden from the reader.
pub fn is_hidden_container(parent: Option<&Element>) -> bool {
    parent.is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
}

/// Normalized text of `element` and all of its descendants.
///
/// Each text node is trimmed; empty pieces are skipped; the remainder are
/// joined with `separator`.
pub fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let parent = node.parent().and_then(|p| p.value().as_element());
            (!is_hidden_container(parent)).then_some(&**text)
        })
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Normalized text of a whole document, space separated.
pub fn document_text(document: &Html) -> String {
    element_text(document.root_element(), " ")
}
