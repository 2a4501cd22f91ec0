//! Query service with memoized joins and results.
//!
//! The joined view table is computed once per catalog, and query results are
//! cached in a bounded Moka cache keyed by the catalog fingerprint plus both
//! specs. Swapping the catalog rejoins and drops every cached result.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info};

use super::join::resolve_catalog;
use super::query::apply;
use super::types::{FilterSpec, ProductView, QueryOutcome, SortSpec};
use crate::catalog::Catalog;
use crate::error::CatalogResult;

/// Default maximum number of cached query results.
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Cache key: which catalog revision, which filter, which ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct QueryKey {
    fingerprint: Arc<str>,
    filter: FilterSpec,
    sort: SortSpec,
}

/// Memoizing front end to the query facade.
pub struct QueryService {
    catalog: Arc<Catalog>,
    fingerprint: Arc<str>,
    /// Joined table for the current catalog, in product order.
    views: Arc<Vec<ProductView>>,
    /// Cache: (fingerprint, filter, sort) -> rows
    results: Cache<QueryKey, Arc<Vec<ProductView>>>,
}

impl QueryService {
    /// Create a service over `catalog`, caching up to `capacity` results.
    ///
    /// Joins eagerly so that broken references surface here rather than on
    /// the first query.
    pub fn new(catalog: Arc<Catalog>, capacity: u64) -> CatalogResult<Self> {
        let views = Arc::new(resolve_catalog(&catalog)?);
        let fingerprint: Arc<str> = Arc::from(catalog.fingerprint());

        info!(
            fingerprint = %fingerprint,
            rows = views.len(),
            capacity,
            "query service ready"
        );

        Ok(Self {
            catalog,
            fingerprint,
            views,
            results: Cache::builder().max_capacity(capacity).build(),
        })
    }

    /// The catalog currently served.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The joined view table for the current catalog.
    pub fn views(&self) -> &[ProductView] {
        &self.views
    }

    /// Run a query, serving repeats from cache.
    pub fn execute(&self, filter: &FilterSpec, sort: &SortSpec) -> QueryOutcome {
        let key = QueryKey {
            fingerprint: Arc::clone(&self.fingerprint),
            filter: filter.clone(),
            sort: *sort,
        };

        if let Some(rows) = self.results.get(&key) {
            debug!(rows = rows.len(), "query cache hit");
            return QueryOutcome::new(rows, self.views.len());
        }

        let rows = Arc::new(apply(&self.views, filter, sort));
        self.results.insert(key, Arc::clone(&rows));

        QueryOutcome::new(rows, self.views.len())
    }

    /// Serve a different catalog from now on.
    ///
    /// On a broken reference the current catalog stays in place.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) -> CatalogResult<()> {
        if catalog.fingerprint() == &*self.fingerprint {
            debug!("catalog unchanged, keeping cached results");
            self.catalog = catalog;
            return Ok(());
        }

        let views = Arc::new(resolve_catalog(&catalog)?);
        self.fingerprint = Arc::from(catalog.fingerprint());
        self.catalog = catalog;
        self.views = views;
        self.results.invalidate_all();

        info!(fingerprint = %self.fingerprint, rows = self.views.len(), "catalog replaced");
        Ok(())
    }

    /// Number of cached query results.
    pub fn cache_entries(&self) -> u64 {
        self.results.run_pending_tasks();
        self.results.entry_count()
    }
}
