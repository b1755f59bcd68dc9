//! # Status Site
//!
//! Builds a static status dashboard for a set of cities. Each city has a few
//! configured source pages (burn-ban status, sewer overflow advisories, ...);
//! every page is fetched once, reduced to a short status string, and the
//! results are written out as plain HTML.
//!
//! ## Usage
//!
//! ```sh
//! status_site -c ./cities -o ./docs
//! ```
//!
//! ## Architecture
//!
//! 1. **Config**: Discover `cities/<slug>/sources/*.yaml`
//! 2. **Scrape**: Fetch each source and extract its status (adapter or selector)
//! 3. **Output**: Write `docs/<slug>/index.html` and `docs/index.html`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use scrapers::fetch::build_client;
use scrapers::registry::REGISTRY;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("status_site starting up");

    let args = Cli::parse();
    debug!(cities_dir = ?args.cities_dir, output_dir = ?args.output_dir, only = ?args.cities, "Parsed CLI arguments");
    info!(adapters = ?REGISTRY.names(), "Adapters registered");

    let client = build_client()?;
    let summary = match pipeline::build_site(&client, &args.cities_dir, &args.output_dir, &args.cities).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(path = %args.output_dir.display(), error = %e, "Site build failed");
            return Err(e);
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        cities = summary.cities,
        sources = summary.sources,
        degraded = summary.degraded,
        "Execution complete"
    );

    Ok(())
}
