//! Named adapter registry.
//!
//! An adapter is a plain function from fetched HTML to a status string,
//! written for one known page layout. Configs refer to adapters by name.
//!
//! The process-wide [`REGISTRY`] is built once, on first use, from
//! [`AdapterRegistry::with_builtin`] and is read-only afterwards.

use super::dom::AdapterError;
use super::{multco, portland};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Source-specific extraction heuristic.
///
/// Must be pure: no side effects and no state carried between calls.
pub type AdapterFn = fn(&str) -> Result<String, AdapterError>;

/// Built-in adapters shared by every scrape in this process.
pub static REGISTRY: Lazy<AdapterRegistry> = Lazy::new(AdapterRegistry::with_builtin);

/// Mapping from adapter name to [`AdapterFn`].
#[derive(Debug, Default, Clone)]
pub struct AdapterRegistry {
    adapters: HashMap<String, AdapterFn>,
}

impl AdapterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every adapter this binary ships with.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(multco::ADAPTER_NAME, multco::multco_wood_burning);
        registry.register(portland::ADAPTER_NAME, portland::portland_big_pipe);
        registry
    }

    /// Associate `name` with `adapter`, replacing and returning any previous entry.
    pub fn register(&mut self, name: impl Into<String>, adapter: AdapterFn) -> Option<AdapterFn> {
        self.adapters.insert(name.into(), adapter)
    }

    pub fn lookup(&self, name: &str) -> Option<AdapterFn> {
        self.adapters.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
