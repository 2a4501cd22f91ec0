//! Gather query engine module.
//!
//! This module provides:
//! - Join resolver: products enriched with category and owner
//! - Filter engine: owner, category, and free-text predicates
//! - Sort engine: stable single-column ordering
//! - Query facade: join, filter, sort in one call
//! - QueryService: memoized queries behind a catalog fingerprint

pub mod filter;
pub mod join;
pub mod query;
pub mod query_service;
pub mod sort;
pub mod types;

pub use filter::{Predicate, filter};
pub use join::{resolve, resolve_catalog};
pub use query::{query, query_outcome, query_tables};
pub use query_service::{DEFAULT_CACHE_CAPACITY, QueryService};
pub use sort::{collate, compare, sort};
pub use types::{
    FilterSpec, NO_MATCH_MESSAGE, ProductView, QueryOutcome, SearchScope, SortDirection, SortKey,
    SortSpec, UnknownKeyword,
};
