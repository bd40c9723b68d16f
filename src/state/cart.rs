//! Demo cart: an append-only session ledger.

use crate::state::types::CartItem;

/// Ordered, unbounded list of items added during the session.
///
/// No removal, no deduplication, no persistence.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    /// Items in insertion order.
    items: Vec<CartItem>,
}

impl CartLedger {
    /// Append `item` and return the new item count.
    pub fn add(&mut self, item: CartItem) -> usize {
        tracing::info!(product = %item.id, name = %item.name, "added to cart");
        self.items.push(item);
        self.items.len()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProductId;

    fn item(id: &str, price: f64) -> CartItem {
        CartItem {
            id: ProductId::from(id),
            name: format!("Produit {id}"),
            price,
        }
    }

    #[test]
    /// What: Ledger appends duplicates and counts monotonically
    ///
    /// - Input: Add a, a, b
    /// - Output: Counts 1, 2, 3; order preserved; total summed
    fn ledger_appends_without_dedup() {
        let mut cart = CartLedger::default();
        assert!(cart.is_empty());
        assert_eq!(cart.add(item("a", 1000.0)), 1);
        assert_eq!(cart.add(item("a", 1000.0)), 2);
        assert_eq!(cart.add(item("b", 500.0)), 3);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a", "b"]);
        assert!((cart.total() - 2500.0).abs() < f64::EPSILON);
    }
}
