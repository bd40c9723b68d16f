//! Field-by-field edits of the filter criteria, as driven by the selectors.

use crate::logic::filter::apply_filters_preserve_selection;
use crate::state::{AppState, PriceRange};

/// What: Advance the category selector: none → each category → none.
///
/// Inputs:
/// - `app`: Application state with derived `categories`
///
/// Output:
/// - Updates `app.criteria.category` and recomputes results.
pub fn cycle_category(app: &mut AppState) {
    let next = match app.criteria.category.as_deref() {
        None => app.categories.first().cloned(),
        Some(cur) => app
            .categories
            .iter()
            .position(|c| c == cur)
            .and_then(|i| app.categories.get(i + 1))
            .cloned(),
    };
    app.criteria.category = next;
    apply_filters_preserve_selection(app);
}

/// What: Advance the price selector: none → each bracket → none.
///
/// Inputs:
/// - `app`: Application state with configured `price_brackets`
///
/// Output:
/// - Updates `app.criteria.price_range` and recomputes results.
pub fn cycle_price(app: &mut AppState) {
    let next = match app.criteria.price_range {
        None => app.price_brackets.first().copied(),
        Some(cur) => app
            .price_brackets
            .iter()
            .position(|b| *b == cur)
            .and_then(|i| app.price_brackets.get(i + 1))
            .copied(),
    };
    set_price(app, next);
}

/// Advance the sort selector and recompute results.
pub fn cycle_sort(app: &mut AppState) {
    app.criteria.sort = app.criteria.sort.next();
    apply_filters_preserve_selection(app);
}

/// Set a specific price bracket (or clear it) and recompute results.
pub fn set_price(app: &mut AppState, range: Option<PriceRange>) {
    app.criteria.price_range = range;
    apply_filters_preserve_selection(app);
}

/// Reset every criterion to its default and recompute results.
pub fn reset_criteria(app: &mut AppState) {
    app.criteria.reset();
    apply_filters_preserve_selection(app);
}
