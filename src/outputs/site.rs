//! Writing rendered pages into the output directory.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── index.html
//! ├── portland/
//! │   └── index.html
//! └── seattle/
//!     └── index.html
//! ```

use super::html::{render_city_page, render_index};
use crate::models::CityPage;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

const PAGE_FILE: &str = "index.html";

/// Render and write `<output_dir>/<slug>/index.html`.
///
/// Returns the path written.
#[instrument(level = "info", skip_all, fields(city = %page.slug))]
pub async fn write_city_page(
    page: &CityPage,
    output_dir: &Path,
    updated: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let city_dir = output_dir.join(&page.slug);
    if let Err(e) = fs::create_dir_all(&city_dir).await {
        error!(dir = %city_dir.display(), error = %e, "Failed to create city dir");
        return Err(e.into());
    }

    let path = city_dir.join(PAGE_FILE);
    fs::write(&path, render_city_page(page, updated)).await?;
    info!(path = %path.display(), sources = page.sources.len(), "Wrote city page");
    Ok(path)
}

/// Render and write `<output_dir>/index.html`.
#[instrument(level = "info", skip_all, fields(count = cities.len()))]
pub async fn write_index(
    cities: &[(String, String)],
    output_dir: &Path,
    updated: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = output_dir.join(PAGE_FILE);
    fs::write(&path, render_index(cities, updated)).await?;
    info!(path = %path.display(), "Wrote index page");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceStatus;

    #[tokio::test]
    async fn test_write_city_page_and_index() {
        let tmp = tempfile::tempdir().unwrap();
        let page = CityPage {
            slug: "lake-oswego".to_string(),
            name: "Lake Oswego".to_string(),
            sources: vec![SourceStatus {
                name: "Burn ban".to_string(),
                status: "Unavailable".to_string(),
                url: "https://example.com".to_string(),
            }],
        };

        let city_path = write_city_page(&page, tmp.path(), "now").await.unwrap();
        assert_eq!(city_path, tmp.path().join("lake-oswego").join("index.html"));
        let html = std::fs::read_to_string(&city_path).unwrap();
        assert!(html.contains("<h1>Lake Oswego</h1>"));

        let cities = vec![(page.slug.clone(), page.name.clone())];
        let index_path = write_index(&cities, tmp.path(), "now").await.unwrap();
        let html = std::fs::read_to_string(index_path).unwrap();
        assert!(html.contains("./lake-oswego/"));
    }
}
