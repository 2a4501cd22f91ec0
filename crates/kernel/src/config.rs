//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::gather::{DEFAULT_CACHE_CAPACITY, SearchScope};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog document to load (default: ./data/catalog.json).
    pub catalog_path: PathBuf,

    /// Maximum cached query results (default: 256).
    pub query_cache_capacity: u64,

    /// Default search scope for text queries (default: name).
    pub search_scope: SearchScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./data/catalog.json"),
            query_cache_capacity: DEFAULT_CACHE_CAPACITY,
            search_scope: SearchScope::Name,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let catalog_path = lookup("SHELF_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let query_cache_capacity = match lookup("SHELF_QUERY_CACHE_CAPACITY") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .context("SHELF_QUERY_CACHE_CAPACITY must be a valid u64")?,
            None => defaults.query_cache_capacity,
        };

        let search_scope = match lookup("SHELF_SEARCH_SCOPE") {
            Some(v) => v
                .parse::<SearchScope>()
                .context("SHELF_SEARCH_SCOPE must be 'name' or 'all'")?,
            None => defaults.search_scope,
        };

        Ok(Self {
            catalog_path,
            query_cache_capacity,
            search_scope,
        })
    }
}
