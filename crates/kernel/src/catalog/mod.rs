//! Static catalog store.
//!
//! Holds the three immutable tables (users, categories, products) with
//! id indexes for constant-time lookups. Construction validates id
//! uniqueness and every cross-table reference, so a `Catalog` value is
//! always referentially intact.

mod loader;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use loader::CatalogFormat;

use crate::error::{CatalogError, CatalogResult, Entity};
use crate::models::{Category, Product, Sex, User};

/// Serialized shape of a catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub products: Vec<Product>,
}

/// Read-only catalog of users, categories, and products.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
    user_index: HashMap<i64, usize>,
    category_index: HashMap<i64, usize>,
    product_index: HashMap<i64, usize>,
    fingerprint: String,
}

impl Catalog {
    /// Build a catalog from its three tables.
    ///
    /// Fails with `DuplicateId` if an id repeats within a table and with
    /// `BrokenReference` if a category owner or product category is missing.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> CatalogResult<Self> {
        let user_index = build_index(Entity::User, users.iter().map(|u| u.id))?;
        let category_index = build_index(Entity::Category, categories.iter().map(|c| c.id))?;
        let product_index = build_index(Entity::Product, products.iter().map(|p| p.id))?;

        for category in &categories {
            if !user_index.contains_key(&category.owner_id) {
                return Err(CatalogError::BrokenReference {
                    entity: Entity::Category,
                    id: category.id,
                    target: Entity::User,
                    reference: category.owner_id,
                });
            }
        }

        for product in &products {
            if !category_index.contains_key(&product.category_id) {
                return Err(CatalogError::BrokenReference {
                    entity: Entity::Product,
                    id: product.id,
                    target: Entity::Category,
                    reference: product.category_id,
                });
            }
        }

        let fingerprint = fingerprint(&users, &categories, &products);

        Ok(Self {
            users,
            categories,
            products,
            user_index,
            category_index,
            product_index,
            fingerprint,
        })
    }

    /// Build a catalog from a deserialized document.
    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        Self::new(document.users, document.categories, document.products)
    }

    /// Copy the tables back into a serializable document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            users: self.users.clone(),
            categories: self.categories.clone(),
            products: self.products.clone(),
        }
    }

    /// Users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a user by id.
    pub fn user(&self, id: i64) -> Option<&User> {
        self.user_index.get(&id).map(|&i| &self.users[i])
    }

    /// Look up a category by id.
    pub fn category(&self, id: i64) -> Option<&Category> {
        self.category_index.get(&id).map(|&i| &self.categories[i])
    }

    /// Look up a product by id.
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.product_index.get(&id).map(|&i| &self.products[i])
    }

    /// Hex SHA-256 digest identifying this catalog's contents.
    ///
    /// Two catalogs with the same rows in the same order share a fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn build_index(
    entity: Entity,
    ids: impl Iterator<Item = i64>,
) -> CatalogResult<HashMap<i64, usize>> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id, position).is_some() {
            return Err(CatalogError::DuplicateId { entity, id });
        }
    }
    Ok(index)
}

fn fingerprint(users: &[User], categories: &[Category], products: &[Product]) -> String {
    let mut hasher = Sha256::new();

    update_field(&mut hasher, b"users");
    for user in users {
        update_field(&mut hasher, &user.id.to_le_bytes());
        update_field(&mut hasher, user.name.as_bytes());
        let sex: &[u8] = match user.sex {
            Sex::Male => b"m",
            Sex::Female => b"f",
        };
        update_field(&mut hasher, sex);
    }

    update_field(&mut hasher, b"categories");
    for category in categories {
        update_field(&mut hasher, &category.id.to_le_bytes());
        update_field(&mut hasher, category.title.as_bytes());
        update_field(&mut hasher, category.icon.as_bytes());
        update_field(&mut hasher, &category.owner_id.to_le_bytes());
    }

    update_field(&mut hasher, b"products");
    for product in products {
        update_field(&mut hasher, &product.id.to_le_bytes());
        update_field(&mut hasher, product.name.as_bytes());
        update_field(&mut hasher, &product.category_id.to_le_bytes());
    }

    hex::encode(hasher.finalize())
}

/// Length-prefixed so that "ab" + "c" hashes differently from "a" + "bc".
fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
