use crate::logic::query;
use crate::state::{AppState, ProductId};

/// What: Recompute `app.results` from the catalog and current criteria.
///
/// Inputs:
/// - `app`: Mutable application state containing the catalog, criteria and selection
///
/// Output:
/// - Updates `app.results` and keeps the highlighted product when it survives.
///
/// Details:
/// - Runs on every criteria change; no debouncing, each change recomputes
///   the full derived view.
/// - Selection is restored by id when present; otherwise clamped, or cleared
///   when the list is empty.
pub fn apply_filters_preserve_selection(app: &mut AppState) {
    let prev_id = app.results.get(app.selected).cloned();

    app.results = query::apply(app.catalog.products(), &app.criteria)
        .into_iter()
        .map(|p| p.id.clone())
        .collect();
    tracing::debug!(
        count = app.results.len(),
        category = ?app.criteria.category,
        price = ?app.criteria.price_range.map(|r| r.to_string()),
        sort = app.criteria.sort.as_config_key(),
        "criteria applied"
    );

    restore_selection(app, prev_id.as_ref());
}

/// Re-point the results selection at `prev_id`, or clamp it.
fn restore_selection(app: &mut AppState, prev_id: Option<&ProductId>) {
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    if let Some(pos) = prev_id.and_then(|id| app.results.iter().position(|r| r == id)) {
        app.selected = pos;
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
    }
    app.list_state.select(Some(app.selected));
}
