//! Join resolver: denormalizes products into product views.

use std::collections::HashMap;

use super::types::ProductView;
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult, Entity};
use crate::models::{Category, Product, User};

/// Attach each product's category and that category's owner.
///
/// Output preserves product order. A product whose category is missing, or a
/// category whose owner is missing, fails the whole join with
/// `BrokenReference`; rows are never dropped. If an id appears more than once
/// in a table the first row with that id wins.
pub fn resolve(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> CatalogResult<Vec<ProductView>> {
    let users_by_id = first_by_id(users, |u| u.id);
    let categories_by_id = first_by_id(categories, |c| c.id);

    products
        .iter()
        .map(|product| {
            let category = categories_by_id
                .get(&product.category_id)
                .copied()
                .ok_or(CatalogError::BrokenReference {
                    entity: Entity::Product,
                    id: product.id,
                    target: Entity::Category,
                    reference: product.category_id,
                })?;

            let owner = users_by_id
                .get(&category.owner_id)
                .copied()
                .ok_or(CatalogError::BrokenReference {
                    entity: Entity::Category,
                    id: category.id,
                    target: Entity::User,
                    reference: category.owner_id,
                })?;

            Ok(view(product, category, owner))
        })
        .collect()
}

/// Join using the catalog's own indexes.
pub fn resolve_catalog(catalog: &Catalog) -> CatalogResult<Vec<ProductView>> {
    catalog
        .products()
        .iter()
        .map(|product| {
            let category =
                catalog
                    .category(product.category_id)
                    .ok_or(CatalogError::BrokenReference {
                        entity: Entity::Product,
                        id: product.id,
                        target: Entity::Category,
                        reference: product.category_id,
                    })?;

            let owner = catalog
                .user(category.owner_id)
                .ok_or(CatalogError::BrokenReference {
                    entity: Entity::Category,
                    id: category.id,
                    target: Entity::User,
                    reference: category.owner_id,
                })?;

            Ok(view(product, category, owner))
        })
        .collect()
}

fn view(product: &Product, category: &Category, owner: &User) -> ProductView {
    ProductView {
        id: product.id,
        name: product.name.clone(),
        category: category.clone(),
        owner: owner.clone(),
    }
}

fn first_by_id<'a, T>(rows: &'a [T], id: impl Fn(&T) -> i64) -> HashMap<i64, &'a T> {
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        index.entry(id(row)).or_insert(row);
    }
    index
}
