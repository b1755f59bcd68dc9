//! Command-line interface definitions.
//!
//! All paths can be provided via flags or environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Build the static city status site.
///
/// # Examples
///
/// ```sh
/// # Scrape every city under ./cities and write ./docs
/// status_site
///
/// # Only rebuild Portland, writing elsewhere
/// status_site -c ./cities -o ./public --city portland
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory containing one subdirectory per city
    #[arg(short, long, env = "STATUS_CITIES_DIR", default_value = "cities")]
    pub cities_dir: PathBuf,

    /// Directory the HTML site is written to
    #[arg(short, long, env = "STATUS_OUTPUT_DIR", default_value = "docs")]
    pub output_dir: PathBuf,

    /// Only build these city slugs (repeatable)
    #[arg(long = "city", value_name = "SLUG")]
    pub cities: Vec<String>,
}
