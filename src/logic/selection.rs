use crate::logic::query;
use crate::state::{AppState, Focus, ProductId};

/// Number of rows in the pane that has focus.
fn focused_len(app: &AppState) -> usize {
    match app.focus {
        Focus::Results => app.results.len(),
        Focus::Featured => query::featured(app.catalog.products(), app.featured_count).len(),
        Focus::Custom => query::custom(app.catalog.products()).len(),
    }
}

/// What: Move the selection in the focused pane by `delta`.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: Signed step (negative moves up)
///
/// Output:
/// - Updates the focused pane's selection, clamped to its bounds.
///
/// Details:
/// - No-op on an empty pane.
pub fn move_sel(app: &mut AppState, delta: isize) {
    let len = focused_len(app);
    if len == 0 {
        return;
    }
    let cur = match app.focus {
        Focus::Results => app.selected,
        Focus::Featured => app.featured_state.selected().unwrap_or(0),
        Focus::Custom => app.custom_state.selected().unwrap_or(0),
    };
    let idx = cur.saturating_add_signed(delta).min(len - 1);
    match app.focus {
        Focus::Results => {
            app.selected = idx;
            app.list_state.select(Some(idx));
        }
        Focus::Featured => app.featured_state.select(Some(idx)),
        Focus::Custom => app.custom_state.select(Some(idx)),
    }
}

/// What: Switch focus to the next pane, seeding its selection.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Advances `app.focus`; a pane gaining focus with rows selects its first row.
pub fn focus_next(app: &mut AppState) {
    app.focus = app.focus.next();
    let len = focused_len(app);
    let state = match app.focus {
        Focus::Results => &mut app.list_state,
        Focus::Featured => &mut app.featured_state,
        Focus::Custom => &mut app.custom_state,
    };
    if len > 0 && state.selected().is_none() {
        state.select(Some(0));
    }
}

/// What: Resolve the product highlighted in the focused pane.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - The highlighted product's id, or `None` when the pane is empty.
#[must_use]
pub fn selected_product_id(app: &AppState) -> Option<ProductId> {
    let products = app.catalog.products();
    match app.focus {
        Focus::Results => app.results.get(app.selected).cloned(),
        Focus::Featured => app
            .featured_state
            .selected()
            .and_then(|i| query::featured(products, app.featured_count).get(i))
            .map(|p| p.id.clone()),
        Focus::Custom => app
            .custom_state
            .selected()
            .and_then(|i| query::custom(products).get(i).map(|p| p.id.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::apply_filters_preserve_selection;
    use crate::state::{CatalogStore, Product};

    fn product(id: &str, is_custom: bool) -> Product {
        Product {
            id: ProductId::from(id),
            name: id.to_string(),
            sku: String::new(),
            description: String::new(),
            price: 1.0,
            category: "x".into(),
            images: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            is_custom,
        }
    }

    fn app() -> AppState {
        let mut app = AppState::default();
        app.catalog = CatalogStore::new(vec![
            product("a", false),
            product("b", true),
            product("c", false),
            product("d", true),
            product("e", false),
        ])
        .unwrap();
        app.featured_count = 2;
        apply_filters_preserve_selection(&mut app);
        app
    }

    #[test]
    /// What: Results selection clamps at both ends
    ///
    /// - Input: Move up from 0; move down by 10
    /// - Output: Stays at 0; stops at last index
    fn move_sel_clamps() {
        let mut app = app();
        move_sel(&mut app, -1);
        assert_eq!(app.selected, 0);
        move_sel(&mut app, 10);
        assert_eq!(app.selected, 4);
        assert_eq!(selected_product_id(&app), Some(ProductId::from("e")));
    }

    #[test]
    /// What: Focus cycles through featured and custom panes
    ///
    /// - Input: Tab to featured, move down; tab to custom, move down
    /// - Output: Featured "b" (second of first two); custom "d"
    fn focus_and_pane_selection() {
        let mut app = app();
        focus_next(&mut app);
        assert_eq!(app.focus, Focus::Featured);
        move_sel(&mut app, 5);
        assert_eq!(selected_product_id(&app), Some(ProductId::from("b")));

        focus_next(&mut app);
        assert_eq!(app.focus, Focus::Custom);
        move_sel(&mut app, 1);
        assert_eq!(selected_product_id(&app), Some(ProductId::from("d")));

        focus_next(&mut app);
        assert_eq!(app.focus, Focus::Results);
    }
}
