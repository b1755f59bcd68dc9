//! Source scraping: fetch a configured page and reduce it to a status string.
//!
//! Each source picks one extraction strategy, resolved in this order:
//!
//! | Config | Strategy | Module |
//! |--------|----------|--------|
//! | `adapter` set and registered | named adapter | [`registry`], [`multco`], [`portland`] |
//! | `selector` set | first CSS match | [`selector`] |
//! | neither | none, status is "Unavailable" | |
//!
//! # Failure handling
//!
//! [`scrape_source`] never fails. Every problem is reported as a sentinel
//! status so one broken third-party site cannot stop the rest of the build:
//!
//! | Condition | Status |
//! |-----------|--------|
//! | fetch error, timeout, non-2xx | [`ERROR_FETCHING`] |
//! | adapter returned an error or panicked | [`ERROR_PARSING`] |
//! | adapter returned empty text | [`UNAVAILABLE`] |
//! | selector matched nothing / no strategy | [`UNAVAILABLE`] |

pub mod dom;
pub mod fetch;
pub mod multco;
pub mod portland;
pub mod registry;
pub mod selector;

use crate::models::SourceConfig;
use fetch::fetch;
use registry::{AdapterFn, AdapterRegistry, REGISTRY};
use reqwest::Client;
use selector::extract_with_selector;
use std::panic;
use tracing::{debug, error, instrument, warn};

pub const UNAVAILABLE: &str = "Unavailable";
pub const ERROR_FETCHING: &str = "Error fetching page";
pub const ERROR_PARSING: &str = "Error parsing page";

/// Whether `status` is one of the degraded-outcome sentinels.
pub fn is_sentinel(status: &str) -> bool {
    [UNAVAILABLE, ERROR_FETCHING, ERROR_PARSING].contains(&status)
}

/// Scrape one source using the built-in adapters.
#[instrument(level = "info", skip_all, fields(source = %config.name, url = %config.url))]
pub async fn scrape_source(client: &Client, config: &SourceConfig) -> String {
    scrape_source_with(client, &REGISTRY, config).await
}

/// Scrape one source, resolving adapter names against `registry`.
pub async fn scrape_source_with(
    client: &Client,
    registry: &AdapterRegistry,
    config: &SourceConfig,
) -> String {
    let html = match fetch(client, &config.url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(error = %e, url = %config.url, "Fetch failed");
            return ERROR_FETCHING.to_string();
        }
    };
    extract_status(registry, config, &html)
}

/// Reduce an already fetched page to a status string.
///
/// Holds no state between calls: the same registry, config, and HTML always
/// produce the same status.
pub fn extract_status(registry: &AdapterRegistry, config: &SourceConfig, html: &str) -> String {
    if let Some(name) = config.adapter() {
        match registry.lookup(name) {
            Some(adapter) => return run_adapter(name, adapter, html),
            None => warn!(adapter = name, "Unknown adapter; trying selector"),
        }
    }

    if let Some(selector) = config.selector() {
        return extract_with_selector(html, selector);
    }

    debug!("No extraction strategy configured");
    UNAVAILABLE.to_string()
}

/// Run an adapter behind a failure boundary covering both errors and panics.
fn run_adapter(name: &str, adapter: AdapterFn, html: &str) -> String {
    match panic::catch_unwind(|| adapter(html)) {
        Ok(Ok(status)) if status.trim().is_empty() => {
            warn!(adapter = name, "Adapter produced no text");
            UNAVAILABLE.to_string()
        }
        Ok(Ok(status)) => status,
        Ok(Err(e)) => {
            warn!(adapter = name, error = %e, "Adapter failed");
            ERROR_PARSING.to_string()
        }
        Err(_) => {
            error!(adapter = name, "Adapter panicked");
            ERROR_PARSING.to_string()
        }
    }
}
