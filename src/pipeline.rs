//! End-to-end site build: load configs, scrape every source, write pages.
//!
//! Sources are scraped one at a time, in city then file order. A source
//! that fails only degrades its own status line, and a city page that fails
//! to write is logged and left out of the index.

use crate::config::load_all;
use crate::models::{CityPage, SourceConfig, SourceStatus};
use crate::outputs::site::{write_city_page, write_index};
use crate::scrapers::{self, scrape_source};
use crate::utils::{ensure_writable_dir, slug_to_name};
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Counts reported at the end of a build.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// City pages written this run.
    pub cities: usize,
    /// Sources scraped this run.
    pub sources: usize,
    /// Sources whose status is a sentinel.
    pub degraded: usize,
}

/// Scrape all of one city's sources, in order.
#[instrument(level = "info", skip(client, configs), fields(count = configs.len()))]
pub async fn scrape_city(client: &Client, slug: &str, configs: &[SourceConfig]) -> CityPage {
    let mut sources = Vec::with_capacity(configs.len());
    for config in configs {
        let status = scrape_source(client, config).await;
        if scrapers::is_sentinel(&status) {
            warn!(source = %config.name, %status, "Source degraded");
        } else {
            info!(source = %config.name, %status, "Scraped source");
        }
        sources.push(SourceStatus {
            name: config.name.clone(),
            status,
            url: config.url.clone(),
        });
    }

    CityPage {
        slug: slug.to_string(),
        name: slug_to_name(slug),
        sources,
    }
}

/// Slugs in `only` that name no configured city.
fn unknown_cities<'a>(only: &'a [String], all: &BTreeMap<String, Vec<SourceConfig>>) -> Vec<&'a str> {
    only.iter()
        .filter(|slug| !all.contains_key(slug.as_str()))
        .map(String::as_str)
        .collect()
}

/// Build the whole site into `output_dir`.
///
/// When `only` is non-empty, just those city slugs are scraped. The index
/// still links other cities whose page already exists in `output_dir`.
///
/// # Errors
///
/// Fails only if the output directory is unusable or the index cannot be
/// written. Scrape failures never surface here.
#[instrument(level = "info", skip_all, fields(cities_dir = %cities_dir.display(), output_dir = %output_dir.display()))]
pub async fn build_site(
    client: &Client,
    cities_dir: &Path,
    output_dir: &Path,
    only: &[String],
) -> Result<BuildSummary, Box<dyn Error>> {
    ensure_writable_dir(output_dir).await?;

    let updated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut summary = BuildSummary::default();
    let mut index: Vec<(String, String)> = Vec::new();

    let all = load_all(cities_dir);
    for slug in unknown_cities(only, &all) {
        warn!(city = %slug, "Requested city has no config directory");
    }

    for (slug, configs) in all {
        if configs.is_empty() {
            debug!(city = %slug, "No sources; skipping");
            continue;
        }

        if !only.is_empty() && !only.contains(&slug) {
            if output_dir.join(&slug).join("index.html").is_file() {
                index.push((slug.clone(), slug_to_name(&slug)));
            }
            continue;
        }

        let page = scrape_city(client, &slug, &configs).await;
        summary.sources += page.sources.len();
        summary.degraded += page
            .sources
            .iter()
            .filter(|s| scrapers::is_sentinel(&s.status))
            .count();

        match write_city_page(&page, output_dir, &updated).await {
            Ok(_) => {
                summary.cities += 1;
                index.push((page.slug, page.name));
            }
            Err(e) => error!(city = %slug, error = %e, "Failed to write city page"),
        }
    }

    write_index(&index, output_dir, &updated).await?;
    info!(
        cities = summary.cities,
        sources = summary.sources,
        degraded = summary.degraded,
        "Site build complete"
    );
    Ok(summary)
}
