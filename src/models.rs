//! Data models shared by config loading, scraping, and rendering.
//!
//! - [`SourceConfig`]: one configured source page for a city, as loaded from YAML
//! - [`SourceStatus`]: the scraped status of one source, ready for rendering
//! - [`CityPage`]: everything needed to render a single city's page

/// One external page configured for a city.
///
/// Loaded from `cities/<slug>/sources/*.yaml`. By the time a value of this
/// type exists, `name` and `url` are non-empty and empty `selector`/`adapter`
/// strings have been normalized to `None`.
///
/// If both `adapter` and `selector` are set, the adapter wins; the selector
/// is only consulted when the adapter name is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Display name of the source (e.g. "Wood burning").
    pub name: String,
    /// Page to fetch.
    pub url: String,
    /// CSS selector for the generic extractor.
    pub selector: Option<String>,
    /// Name of a registered adapter.
    pub adapter: Option<String>,
}

#[cfg(test)]
impl SourceConfig {
    /// Build a config with no extraction strategy.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            selector: None,
            adapter: None,
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = Some(adapter.into());
        self
    }
}

impl SourceConfig {
    /// The configured selector, ignoring blank values.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// The configured adapter name, ignoring blank values.
    pub fn adapter(&self) -> Option<&str> {
        self.adapter.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// The outcome of scraping one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatus {
    /// Display name copied from the config.
    pub name: String,
    /// Status text or one of the sentinel strings. Not HTML-escaped.
    pub status: String,
    /// Link to the original page.
    pub url: String,
}

/// A city and the statuses of all of its sources.
#[derive(Debug, Clone)]
pub struct CityPage {
    /// Directory name under `cities/`, also the output path segment.
    pub slug: String,
    /// Human-readable name derived from the slug.
    pub name: String,
    pub sources: Vec<SourceStatus>,
}
