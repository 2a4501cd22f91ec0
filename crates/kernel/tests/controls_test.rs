#![allow(clippy::unwrap_used, clippy::expect_used)]
//! List control integration tests.
//!
//! Drives a `QueryService` the way the product list screen does: owner
//! tabs, category buttons, the search box, header clicks, and reset.

use std::sync::Arc;

use shelf_kernel::controls::SortIndicator;
use shelf_kernel::gather::{FilterSpec, QueryService, SortKey, SortSpec};
use shelf_kernel::render::render_table;
use shelf_test_utils::{catalog, ids, names, sample_builder, sample_catalog};

fn service() -> QueryService {
    QueryService::new(Arc::new(sample_catalog()), 32).unwrap()
}

#[test]
fn browsing_session() {
    let service = service();
    let mut filter = FilterSpec::default();
    let mut sort = SortSpec::unsorted();

    // Initial screen: everything, catalog order.
    let outcome = service.execute(&filter, &sort);
    assert_eq!(ids(outcome.rows()), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(!filter.is_active());

    // Anna's tab.
    filter.select_owner(Some(2));
    assert!(filter.is_owner_selected(Some(2)));
    assert!(!filter.is_owner_selected(None));
    let outcome = service.execute(&filter, &sort);
    assert_eq!(names(outcome.rows()), vec!["Bread", "Eggs", "Sugar", "Sausage", "Apple"]);

    // Only Fruits.
    filter.toggle_category(3);
    assert!(filter.is_category_selected(3));
    assert_eq!(names(service.execute(&filter, &sort).rows()), vec!["Apple"]);

    // Add Grocery, then sort by product name.
    filter.toggle_category(1);
    sort = sort.toggled(SortKey::Name);
    assert_eq!(sort.indicator(SortKey::Name), SortIndicator::Ascending);
    assert_eq!(
        names(service.execute(&filter, &sort).rows()),
        vec!["Apple", "Bread", "Eggs", "Sausage", "Sugar"]
    );

    // Second click flips the direction.
    sort = sort.toggled(SortKey::Name);
    assert_eq!(sort.indicator(SortKey::Name), SortIndicator::Descending);
    assert_eq!(
        names(service.execute(&filter, &sort).rows()),
        vec!["Sugar", "Sausage", "Eggs", "Bread", "Apple"]
    );

    // Search narrows further.
    filter.set_query("  sa ");
    assert_eq!(names(service.execute(&filter, &sort).rows()), vec!["Sausage"]);

    // Nothing matches.
    filter.set_query("tea");
    let outcome = service.execute(&filter, &sort);
    assert!(outcome.is_empty());
    assert_eq!(outcome.total(), 8);
    assert_eq!(
        render_table(&outcome, &sort),
        "No products matching selected criteria\n"
    );

    // Reset clears constraints but not the sort.
    filter.reset();
    assert!(!filter.is_active());
    assert_eq!(filter, FilterSpec::default());
    let outcome = service.execute(&filter, &sort);
    assert_eq!(outcome.len(), 8);
    assert_eq!(outcome.rows()[0].name, "Sweater");

    // Third click returns to catalog order.
    sort = sort.toggled(SortKey::Name);
    assert_eq!(sort, SortSpec::unsorted());
    assert_eq!(sort.indicator(SortKey::Name), SortIndicator::Unsorted);
}

#[test]
fn switching_columns_restarts_ascending() {
    let service = service();
    let filter = FilterSpec::default();

    let sort = SortSpec::unsorted()
        .toggled(SortKey::Owner)
        .toggled(SortKey::Owner)
        .toggled(SortKey::Id);

    assert_eq!(sort, SortSpec::ascending(SortKey::Id));
    assert_eq!(sort.indicator(SortKey::Owner), SortIndicator::Unsorted);
    assert_eq!(ids(service.execute(&filter, &sort).rows()), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn category_buttons_toggle_and_show_all() {
    let service = service();
    let sort = SortSpec::unsorted();
    let mut filter = FilterSpec::default();

    filter.toggle_category(5);
    filter.toggle_category(2);
    assert_eq!(
        names(service.execute(&filter, &sort).rows()),
        vec!["Milk", "Jacket", "Sweater"]
    );

    filter.toggle_category(5);
    assert!(!filter.is_category_selected(5));
    assert_eq!(names(service.execute(&filter, &sort).rows()), vec!["Milk"]);

    filter.show_all_categories();
    assert!(!filter.is_active());
    assert_eq!(service.execute(&filter, &sort).len(), 8);
}

#[test]
fn repeated_queries_are_served_from_cache() {
    let service = service();
    let filter = FilterSpec::new().with_owner(1);
    let sort = SortSpec::descending(SortKey::Id);

    let first = service.execute(&filter, &sort);
    let second = service.execute(&filter, &sort);

    assert!(Arc::ptr_eq(&first.shared_rows(), &second.shared_rows()));
    assert_eq!(service.cache_entries(), 1);
}

#[test]
fn replacing_the_catalog_refreshes_results() {
    let mut service = service();
    let filter = FilterSpec::new().with_query("milk");
    let sort = SortSpec::unsorted();

    assert_eq!(service.execute(&filter, &sort).len(), 1);

    let grown = sample_builder().product(9, "Oat milk", 2).build().unwrap();
    service.replace_catalog(Arc::new(grown)).unwrap();

    let outcome = service.execute(&filter, &sort);
    assert_eq!(names(outcome.rows()), vec!["Milk", "Oat milk"]);
    assert_eq!(outcome.total(), 9);
}

#[test]
fn identical_catalog_keeps_cached_results() {
    let mut service = service();
    let filter = FilterSpec::new().with_owner(3);
    let sort = SortSpec::unsorted();

    let before = service.execute(&filter, &sort);
    service.replace_catalog(Arc::new(sample_catalog())).unwrap();
    let after = service.execute(&filter, &sort);

    assert!(Arc::ptr_eq(&before.shared_rows(), &after.shared_rows()));

    let tiny = catalog()
        .user(1, "Max")
        .category(1, "Drinks", "🍺", 1)
        .product(1, "Milk", 1)
        .build()
        .unwrap();
    service.replace_catalog(Arc::new(tiny)).unwrap();

    assert_eq!(service.views().len(), 1);
    assert_eq!(service.cache_entries(), 0);
    assert!(service.execute(&filter, &sort).is_empty());
}
