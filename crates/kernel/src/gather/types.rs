//! Gather query engine types.
//!
//! Provides type definitions for the product list query engine:
//! - ProductView: a product joined with its category and owning user
//! - FilterSpec: owner, category, and free-text constraints
//! - SortSpec: sort key and direction
//! - QueryOutcome: rows returned to the presentation layer

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Category, User};

/// Message shown by list renderers when a query yields no rows.
pub const NO_MATCH_MESSAGE: &str = "No products matching selected criteria";

/// A product denormalized with its category and the category's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    /// Product id.
    pub id: i64,

    /// Product name.
    pub name: String,

    /// Resolved category.
    pub category: Category,

    /// Owner of the category.
    pub owner: User,
}

/// Filter constraints for a product list query.
///
/// An unset owner, an empty category set, or a blank query leaves the
/// corresponding axis unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Free-text search, matched case-insensitively as a substring.
    #[serde(default)]
    pub query: String,

    /// Only rows whose category is owned by this user.
    #[serde(default, alias = "owner_id")]
    pub owner_id: Option<i64>,

    /// Only rows in one of these categories.
    #[serde(default, alias = "category_ids")]
    pub category_ids: BTreeSet<i64>,

    /// Which text fields the search query is matched against.
    #[serde(default, alias = "search_scope")]
    pub search_scope: SearchScope,
}

impl FilterSpec {
    /// Create an empty (pass-through) filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to one owner.
    pub fn with_owner(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Restrict to a set of categories.
    pub fn with_categories(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    /// Choose the fields searched by the text query.
    pub fn with_search_scope(mut self, scope: SearchScope) -> Self {
        self.search_scope = scope;
        self
    }
}

/// Fields the free-text query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Product name only.
    #[default]
    Name,
    /// Product name, category title, and owner name.
    All,
}

/// Column a product list can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Category,
    #[serde(alias = "user")]
    Owner,
}

impl SortKey {
    /// All sortable columns, in display order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Category,
        SortKey::Owner,
    ];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Product",
            SortKey::Category => "Category",
            SortKey::Owner => "User",
        }
    }
}

/// Sort direction. `None` keeps catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

/// Sort specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to sort by.
    #[serde(default)]
    pub key: SortKey,

    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort specification.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort ascending by `key`.
    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Sort descending by `key`.
    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Keep catalog order.
    pub fn unsorted() -> Self {
        Self::default()
    }
}

/// Rows produced by a query, plus the size of the unfiltered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    rows: Arc<Vec<ProductView>>,
    total: usize,
}

impl QueryOutcome {
    /// Wrap query rows.
    pub fn new(rows: impl Into<Arc<Vec<ProductView>>>, total: usize) -> Self {
        Self {
            rows: rows.into(),
            total,
        }
    }

    /// Matching rows in display order.
    pub fn rows(&self) -> &[ProductView] {
        &self.rows
    }

    /// Shared handle to the rows.
    pub fn shared_rows(&self) -> Arc<Vec<ProductView>> {
        Arc::clone(&self.rows)
    }

    /// Number of matching rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing matched; renderers show `NO_MATCH_MESSAGE` instead of a table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of products before filtering.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Error returned when parsing an unknown sort or search keyword.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownKeyword {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for SortKey {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" | "product" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "owner" | "user" => Ok(SortKey::Owner),
            _ => Err(UnknownKeyword {
                kind: "sort key",
                value: s.to_string(),
                expected: "id, name, category, owner",
            }),
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            "none" => Ok(SortDirection::None),
            _ => Err(UnknownKeyword {
                kind: "sort direction",
                value: s.to_string(),
                expected: "ascending, descending, none",
            }),
        }
    }
}

impl FromStr for SearchScope {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchScope::Name),
            "all" => Ok(SearchScope::All),
            _ => Err(UnknownKeyword {
                kind: "search scope",
                value: s.to_string(),
                expected: "name, all",
            }),
        }
    }
}
