//! Catalog store: the authoritative product snapshot for a session.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::state::types::{Product, ProductId};

/// Immutable-until-reload product collection.
///
/// A store is built once from a loaded snapshot and replaced wholesale on
/// reload; it is never patched in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    /// Products in feed order.
    products: Vec<Product>,
    /// Position of each product in `products`, keyed by id.
    by_id: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// What: Build a store from a freshly loaded product list.
    ///
    /// Inputs:
    /// - `products`: Records in feed order
    ///
    /// Output:
    /// - `Ok(CatalogStore)` when every record is valid and ids are unique
    ///
    /// # Errors
    /// - [`CatalogError::InvalidProduct`] for a negative or non-finite price
    /// - [`CatalogError::DuplicateId`] when two records share an id
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (pos, p) in products.iter().enumerate() {
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(CatalogError::InvalidProduct {
                    id: p.id.clone(),
                    reason: format!("price {} is not a non-negative amount", p.price),
                });
            }
            if by_id.insert(p.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId { id: p.id.clone() });
            }
        }
        Ok(Self { products, by_id })
    }

    /// All products in feed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&pos| self.products.get(pos))
    }

    /// Whether `id` belongs to this snapshot.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the snapshot holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct non-empty categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for p in &self.products {
            if !p.category.is_empty() && !out.iter().any(|c| c == &p.category) {
                out.push(p.category.clone());
            }
        }
        out
    }
}
