//! Shelf test utilities.
//!
//! Helpers for integration testing: catalog builders, the reference
//! sample catalog, and assertions over query rows.

use shelf_kernel::catalog::Catalog;
use shelf_kernel::error::CatalogResult;
use shelf_kernel::gather::ProductView;
use shelf_kernel::models::{Category, Product, Sex, User};

/// Start an empty catalog builder.
pub fn catalog() -> CatalogBuilder {
    CatalogBuilder::default()
}

/// A catalog builder for creating test fixtures.
///
/// Rows are kept exactly as added, so builders can also describe invalid
/// catalogs (duplicate ids, dangling references) for error-path tests.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl CatalogBuilder {
    /// Add a male user.
    pub fn user(self, id: i64, name: &str) -> Self {
        self.user_with_sex(id, name, Sex::Male)
    }

    /// Add a female user.
    pub fn female_user(self, id: i64, name: &str) -> Self {
        self.user_with_sex(id, name, Sex::Female)
    }

    /// Add a user with an explicit sex marker.
    pub fn user_with_sex(mut self, id: i64, name: &str, sex: Sex) -> Self {
        self.users.push(User::new(id, name, sex));
        self
    }

    /// Add a category.
    pub fn category(mut self, id: i64, title: &str, icon: &str, owner_id: i64) -> Self {
        self.categories.push(Category::new(id, title, icon, owner_id));
        self
    }

    /// Add a product.
    pub fn product(mut self, id: i64, name: &str, category_id: i64) -> Self {
        self.products.push(Product::new(id, name, category_id));
        self
    }

    /// Validate and build the catalog.
    pub fn build(self) -> CatalogResult<Catalog> {
        Catalog::new(self.users, self.categories, self.products)
    }
}

/// The reference catalog: four users, five categories, eight products.
pub fn sample_builder() -> CatalogBuilder {
    catalog()
        .user(1, "Roma")
        .female_user(2, "Anna")
        .user(3, "Max")
        .user(4, "John")
        .category(1, "Grocery", "🍞", 2)
        .category(2, "Drinks", "🍺", 1)
        .category(3, "Fruits", "🍏", 2)
        .category(4, "Electronics", "💻", 1)
        .category(5, "Clothes", "👚", 3)
        .product(1, "Milk", 2)
        .product(2, "Bread", 1)
        .product(3, "Eggs", 1)
        .product(4, "Jacket", 5)
        .product(5, "Sugar", 1)
        .product(6, "Sausage", 1)
        .product(7, "Sweater", 5)
        .product(8, "Apple", 3)
}

/// The reference catalog, validated.
pub fn sample_catalog() -> Catalog {
    sample_builder()
        .build()
        .unwrap_or_else(|e| panic!("reference catalog must be valid: {e}"))
}

/// The two-product catalog used in the engine examples: Max owns Drinks,
/// which holds Milk then Bread.
pub fn milk_and_bread() -> Catalog {
    catalog()
        .user(1, "Max")
        .category(1, "Drinks", "🍺", 1)
        .product(1, "Milk", 1)
        .product(2, "Bread", 1)
        .build()
        .unwrap_or_else(|e| panic!("example catalog must be valid: {e}"))
}

/// Product ids of `rows`, in order.
pub fn ids(rows: &[ProductView]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

/// Product names of `rows`, in order.
pub fn names(rows: &[ProductView]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

/// Assertion helpers for query rows.
pub mod assert {
    use shelf_kernel::gather::ProductView;

    /// Assert that `sub` is `full` with zero or more rows removed, order kept.
    pub fn is_subsequence(sub: &[ProductView], full: &[ProductView]) {
        let mut rest = full.iter();
        for row in sub {
            assert!(
                rest.any(|candidate| candidate == row),
                "row {} is missing or out of order",
                row.id
            );
        }
    }

    /// Assert that every row satisfies `check`.
    pub fn all_rows(rows: &[ProductView], what: &str, check: impl Fn(&ProductView) -> bool) {
        for row in rows {
            assert!(check(row), "row {} ({}) fails: {what}", row.id, row.name);
        }
    }
}
