//! Query facade: join, then filter, then sort.

use tracing::debug;

use super::filter::filter;
use super::join::{resolve, resolve_catalog};
use super::sort::sort;
use super::types::{FilterSpec, ProductView, QueryOutcome, SortSpec};
use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::models::{Category, Product, User};

/// Run a product list query against a catalog.
///
/// Deterministic: the same catalog and specs always give the same rows in
/// the same order.
pub fn query(
    catalog: &Catalog,
    filter_spec: &FilterSpec,
    sort_spec: &SortSpec,
) -> CatalogResult<Vec<ProductView>> {
    let views = resolve_catalog(catalog)?;
    Ok(apply(&views, filter_spec, sort_spec))
}

/// Run a product list query over raw tables that have not been validated
/// as a `Catalog`.
pub fn query_tables(
    users: &[User],
    categories: &[Category],
    products: &[Product],
    filter_spec: &FilterSpec,
    sort_spec: &SortSpec,
) -> CatalogResult<Vec<ProductView>> {
    let views = resolve(users, categories, products)?;
    Ok(apply(&views, filter_spec, sort_spec))
}

/// Like [`query`], wrapped with the unfiltered row count.
pub fn query_outcome(
    catalog: &Catalog,
    filter_spec: &FilterSpec,
    sort_spec: &SortSpec,
) -> CatalogResult<QueryOutcome> {
    let rows = query(catalog, filter_spec, sort_spec)?;
    Ok(QueryOutcome::new(rows, catalog.products().len()))
}

/// Filter and sort already-joined views.
pub(crate) fn apply(
    views: &[ProductView],
    filter_spec: &FilterSpec,
    sort_spec: &SortSpec,
) -> Vec<ProductView> {
    let filtered = filter(views, filter_spec);
    let rows = sort(&filtered, sort_spec);

    debug!(
        total = views.len(),
        matched = rows.len(),
        owner = ?filter_spec.owner_id,
        categories = filter_spec.category_ids.len(),
        query = %filter_spec.query,
        sort_key = ?sort_spec.key,
        direction = ?sort_spec.direction,
        "product query executed"
    );

    rows
}
