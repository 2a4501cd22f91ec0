//! Category model: named product groupings, each owned by one user.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: i64,

    /// Human-readable title.
    pub title: String,

    /// Icon glyph shown next to the title.
    pub icon: String,

    /// User that owns this category.
    #[serde(alias = "owner_id")]
    pub owner_id: i64,
}

impl Category {
    /// Create a category record.
    pub fn new(id: i64, title: impl Into<String>, icon: impl Into<String>, owner_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }

    /// Display label combining icon and title, e.g. `"🍺 - Drinks"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}
