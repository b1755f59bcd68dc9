//! City and source discovery from a directory tree.
//!
//! # Layout
//!
//! ```text
//! cities/
//! ├── portland/
//! │   └── sources/
//! │       ├── big-pipe.yaml
//! │       └── wood-burning.yml
//! └── seattle/
//!     └── sources/
//!         └── burn-ban.yaml
//! ```
//!
//! Each source file holds one mapping:
//!
//! ```yaml
//! name: Wood burning
//! url: https://multco.us/...
//! adapter: multco-wood-burning   # or: selector: ".status"
//! ```
//!
//! Loading is forgiving: unreadable or malformed files are logged and skipped.

use crate::models::SourceConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument, warn};

const SOURCES_DIR: &str = "sources";

/// On-disk shape of a source file, before required fields are checked.
#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
    url: Option<String>,
    selector: Option<String>,
    adapter: Option<String>,
}

impl RawSource {
    fn into_config(self) -> Option<SourceConfig> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(SourceConfig {
            name: present(self.name)?,
            url: present(self.url)?,
            selector: present(self.selector),
            adapter: present(self.adapter),
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Sorted city slugs: every non-hidden subdirectory of `cities_dir`.
pub fn discover_cities(cities_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(cities_dir) else {
        debug!(dir = %cities_dir.display(), "Cities directory not readable");
        return Vec::new();
    };

    let mut cities: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();
    cities.sort();
    cities
}

/// Load one source file.
///
/// Returns `None` if the file is missing, not YAML, not a mapping, fails to
/// parse, or lacks a non-empty `name` or `url`.
pub fn load_source_config(path: &Path) -> Option<SourceConfig> {
    if !is_yaml(path) {
        return None;
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read source file");
            return None;
        }
    };

    let raw: RawSource = match serde_yaml::from_str(&text) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Invalid source file");
            return None;
        }
    };

    let config = raw.into_config();
    if config.is_none() {
        warn!(path = %path.display(), "Source file missing name or url");
    }
    config
}

/// All valid sources for one city, in file-name order.
pub fn load_sources_for_city(cities_dir: &Path, city: &str) -> Vec<SourceConfig> {
    let sources_dir = cities_dir.join(city).join(SOURCES_DIR);
    let Ok(entries) = fs::read_dir(&sources_dir) else {
        return Vec::new();
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_yaml(path))
        .collect();
    paths.sort();

    paths.iter().filter_map(|path| load_source_config(path)).collect()
}

/// Every city with its sources, keyed and ordered by slug.
#[instrument(level = "info", skip_all, fields(dir = %cities_dir.display()))]
pub fn load_all(cities_dir: &Path) -> BTreeMap<String, Vec<SourceConfig>> {
    discover_cities(cities_dir)
        .into_iter()
        .map(|city| {
            let sources = load_sources_for_city(cities_dir, &city);
            debug!(%city, count = sources.len(), "Loaded city sources");
            (city, sources)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_source(root: &Path, city: &str, file: &str, body: &str) -> PathBuf {
        let dir = root.join(city).join(SOURCES_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file);
        fs::write(&path, body).unwrap();
        path
    }

    fn fixture() -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write_source(
            root,
            "portland",
            "b-pipe.yaml",
            "name: Big Pipe\nurl: https://example.com/pipe\nadapter: portland-big-pipe\n",
        );
        write_source(
            root,
            "portland",
            "a-burn.yml",
            "name: Wood burning\nurl: https://example.com/burn\nselector: \".status\"\n",
        );
        write_source(root, "portland", "notes.txt", "name: Ignored\nurl: x\n");
        write_source(root, "portland", "broken.yaml", "name: [unclosed\n");
        write_source(root, "portland", "no-url.yaml", "name: Missing url\n");
        write_source(root, "portland", "list.yaml", "- name: A\n  url: B\n");
        fs::create_dir_all(root.join("empty-town")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("README.md"), "not a city").unwrap();
        tmp
    }

    #[test]
    fn test_discover_cities_sorted_and_filtered() {
        let tmp = fixture();
        assert_eq!(discover_cities(tmp.path()), vec!["empty-town", "portland"]);
    }

    #[test]
    fn test_discover_cities_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(discover_cities(&tmp.path().join("nope")).is_empty());
    }

    #[test]
    fn test_load_sources_for_city_keeps_valid_in_order() {
        let tmp = fixture();
        let sources = load_sources_for_city(tmp.path(), "portland");
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Wood burning", "Big Pipe"]);
        assert_eq!(sources[0].selector(), Some(".status"));
        assert_eq!(sources[1].adapter(), Some("portland-big-pipe"));
    }

    #[test]
    fn test_load_source_config_rejects_bad_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        let missing_name = write_source(root, "x", "a.yaml", "url: https://example.com\n");
        let blank_url = write_source(root, "x", "b.yaml", "name: A\nurl: \"  \"\n");
        let empty = write_source(root, "x", "c.yaml", "");
        let wrong_ext = write_source(root, "x", "d.json", "name: A\nurl: B\n");

        assert!(load_source_config(&missing_name).is_none());
        assert!(load_source_config(&blank_url).is_none());
        assert!(load_source_config(&empty).is_none());
        assert!(load_source_config(&wrong_ext).is_none());
        assert!(load_source_config(&root.join("x/sources/absent.yaml")).is_none());
    }

    #[test]
    fn test_load_source_config_blank_strategy_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_source(
            tmp.path(),
            "x",
            "a.yaml",
            "name: A\nurl: https://example.com\nselector: \"\"\nadapter:\n",
        );
        let config = load_source_config(&path).unwrap();
        assert_eq!(config.selector, None);
        assert_eq!(config.adapter, None);
    }

    #[test]
    fn test_load_all() {
        let tmp = fixture();
        let all = load_all(tmp.path());
        assert_eq!(all.keys().collect::<Vec<_>>(), vec!["empty-town", "portland"]);
        assert!(all["empty-town"].is_empty());
        assert_eq!(all["portland"].len(), 2);
    }
}
