//! Filter engine.
//!
//! A `FilterSpec` compiles into a single predicate that is the conjunction of
//! the owner, category, and text tests. Each test is vacuous when its axis is
//! unset, so the order in which constraints were chosen never matters.

use super::types::{FilterSpec, ProductView, SearchScope};

/// Compiled row predicate for one `FilterSpec`.
#[derive(Debug, Clone)]
pub struct Predicate<'a> {
    spec: &'a FilterSpec,
    /// Trimmed, lower-cased query; `None` when the query is blank.
    needle: Option<String>,
}

impl<'a> Predicate<'a> {
    /// Compile a predicate from a filter specification.
    pub fn new(spec: &'a FilterSpec) -> Self {
        let needle = spec.query.trim().to_lowercase();
        Self {
            spec,
            needle: (!needle.is_empty()).then_some(needle),
        }
    }

    /// Whether every constraint is vacuous.
    pub fn is_vacuous(&self) -> bool {
        self.spec.owner_id.is_none() && self.spec.category_ids.is_empty() && self.needle.is_none()
    }

    /// Test a single row.
    pub fn matches(&self, view: &ProductView) -> bool {
        self.owner_matches(view) && self.category_matches(view) && self.text_matches(view)
    }

    fn owner_matches(&self, view: &ProductView) -> bool {
        self.spec
            .owner_id
            .is_none_or(|owner_id| view.owner.id == owner_id)
    }

    fn category_matches(&self, view: &ProductView) -> bool {
        self.spec.category_ids.is_empty() || self.spec.category_ids.contains(&view.category.id)
    }

    fn text_matches(&self, view: &ProductView) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        let contains = |haystack: &str| haystack.to_lowercase().contains(needle.as_str());

        match self.spec.search_scope {
            SearchScope::Name => contains(&view.name),
            SearchScope::All => {
                contains(&view.name) || contains(&view.category.title) || contains(&view.owner.name)
            }
        }
    }
}

/// Keep the rows that pass every active constraint, in input order.
pub fn filter(views: &[ProductView], spec: &FilterSpec) -> Vec<ProductView> {
    let predicate = Predicate::new(spec);
    if predicate.is_vacuous() {
        return views.to_vec();
    }

    views
        .iter()
        .filter(|view| predicate.matches(view))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::{Category, Sex, User};

    fn view(id: i64, name: &str, category: (i64, &str), owner: (i64, &str)) -> ProductView {
        ProductView {
            id,
            name: name.to_string(),
            category: Category::new(category.0, category.1, "*", owner.0),
            owner: User::new(owner.0, owner.1, Sex::Male),
        }
    }

    fn views() -> Vec<ProductView> {
        vec![
            view(1, "Milk", (2, "Drinks"), (1, "Roma")),
            view(2, "Bread", (1, "Grocery"), (2, "Anna")),
            view(3, "Eggs", (1, "Grocery"), (2, "Anna")),
            view(4, "Jacket", (5, "Clothes"), (3, "Max")),
        ]
    }

    fn ids(views: &[ProductView]) -> Vec<i64> {
        views.iter().map(|v| v.id).collect()
    }

    #[test]
    fn vacuous_spec_is_identity() {
        assert_eq!(filter(&views(), &FilterSpec::default()), views());
    }

    #[test]
    fn owner_predicate() {
        let result = filter(&views(), &FilterSpec::new().with_owner(2));
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn unknown_owner_gives_empty_result() {
        assert!(filter(&views(), &FilterSpec::new().with_owner(99)).is_empty());
    }

    #[test]
    fn category_predicate_accepts_any_selected() {
        let result = filter(&views(), &FilterSpec::new().with_categories([5, 2]));
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn text_predicate_is_trimmed_and_case_insensitive() {
        let result = filter(&views(), &FilterSpec::new().with_query("  MI "));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn whitespace_query_is_vacuous() {
        let spec = FilterSpec::new().with_query("   ");
        assert!(Predicate::new(&spec).is_vacuous());
        assert_eq!(filter(&views(), &spec).len(), 4);
    }

    #[test]
    fn name_scope_ignores_category_and_owner() {
        let result = filter(&views(), &FilterSpec::new().with_query("anna"));
        assert!(result.is_empty());
    }

    #[test]
    fn all_scope_searches_category_and_owner() {
        let by_owner = FilterSpec::new()
            .with_query("anna")
            .with_search_scope(SearchScope::All);
        assert_eq!(ids(&filter(&views(), &by_owner)), vec![2, 3]);

        let by_category = FilterSpec::new()
            .with_query("cloth")
            .with_search_scope(SearchScope::All);
        assert_eq!(ids(&filter(&views(), &by_category)), vec![4]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let spec = FilterSpec::new()
            .with_owner(2)
            .with_categories([1])
            .with_query("e");
        assert_eq!(ids(&filter(&views(), &spec)), vec![2, 3]);

        let spec = FilterSpec::new().with_owner(1).with_categories([1]);
        assert!(filter(&views(), &spec).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter(&[], &FilterSpec::new().with_query("milk")).is_empty());
    }
}
