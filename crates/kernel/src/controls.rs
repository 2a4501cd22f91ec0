//! List controls.
//!
//! State transitions the presentation layer applies to `FilterSpec` and
//! `SortSpec` in response to user input: owner tabs, category toggles, the
//! search box, the reset button, and sortable column headers.

use crate::gather::{FilterSpec, SortDirection, SortKey, SortSpec};

/// Header icon state for a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortSpec {
    /// Next sort state after clicking the header for `key`.
    ///
    /// A different (or unsorted) column starts ascending, an ascending column
    /// turns descending, and a descending column returns to catalog order.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key != key || self.direction == SortDirection::None {
            return Self::ascending(key);
        }

        match self.direction {
            SortDirection::Ascending => Self::descending(key),
            SortDirection::Descending | SortDirection::None => Self::unsorted(),
        }
    }

    /// Icon state for the header of `key`.
    pub fn indicator(&self, key: SortKey) -> SortIndicator {
        if self.key != key {
            return SortIndicator::Unsorted;
        }

        match self.direction {
            SortDirection::None => SortIndicator::Unsorted,
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    }
}

impl FilterSpec {
    /// Select an owner tab; `None` is the "All" tab.
    pub fn select_owner(&mut self, owner_id: Option<i64>) {
        self.owner_id = owner_id;
    }

    /// Whether the owner tab for `owner_id` is the active one.
    pub fn is_owner_selected(&self, owner_id: Option<i64>) -> bool {
        self.owner_id == owner_id
    }

    /// Add a category to the selection, or remove it if already selected.
    pub fn toggle_category(&mut self, category_id: i64) {
        if !self.category_ids.remove(&category_id) {
            self.category_ids.insert(category_id);
        }
    }

    /// Whether a category button is selected.
    pub fn is_category_selected(&self, category_id: i64) -> bool {
        self.category_ids.contains(&category_id)
    }

    /// Clear the category selection ("All" categories).
    pub fn show_all_categories(&mut self) {
        self.category_ids.clear();
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Empty the search box.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Drop every constraint. The search scope is a setting, not a
    /// constraint, and is kept.
    pub fn reset(&mut self) {
        self.query.clear();
        self.owner_id = None;
        self.category_ids.clear();
    }

    /// Whether any constraint is active.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.owner_id.is_some() || !self.category_ids.is_empty()
    }
}
