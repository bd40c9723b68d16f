//! Catalog query engine: filter, sort and fixed projections.
//!
//! All functions here are pure. They never mutate the catalog and return
//! references into it, so product data is never copied or re-encoded.

use crate::state::{FilterCriteria, Product, SortMode};

/// What: Derive the ordered view of `catalog` for `criteria`.
///
/// Inputs:
/// - `catalog`: Products in feed order
/// - `criteria`: Category, price bracket and sort mode
///
/// Output:
/// - References to the matching products, in display order
///
/// Details:
/// - Steps run in fixed order: category filter, price filter, sort.
/// - Price sorts use a stable sort; equal prices keep feed order.
/// - `Newest` and `Popular` keep feed order (no backing field exists).
/// - An empty catalog or an empty match is a valid, empty result.
#[must_use]
pub fn apply<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = catalog
        .iter()
        .filter(|p| {
            criteria
                .category
                .as_deref()
                .is_none_or(|c| p.category == c)
        })
        .filter(|p| criteria.price_range.is_none_or(|r| r.contains(p.price)))
        .collect();

    // `sort_by` is stable, which the tie-break rule depends on.
    match criteria.sort {
        SortMode::PriceLow => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceHigh => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::Newest | SortMode::Popular => {}
    }
    items
}

/// First `n` products of the unfiltered catalog, in feed order.
#[must_use]
pub fn featured(catalog: &[Product], n: usize) -> &[Product] {
    &catalog[..n.min(catalog.len())]
}

/// Products flagged `is_custom`, in feed order.
#[must_use]
pub fn custom(catalog: &[Product]) -> Vec<&Product> {
    catalog.iter().filter(|p| p.is_custom).collect()
}
