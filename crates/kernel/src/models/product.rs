//! Product model.

use serde::{Deserialize, Serialize};

/// A product row as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: i64,

    /// Product name.
    pub name: String,

    /// Category this product belongs to.
    #[serde(alias = "category_id")]
    pub category_id: i64,
}

impl Product {
    /// Create a product record.
    pub fn new(id: i64, name: impl Into<String>, category_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}
