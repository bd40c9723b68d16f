//! Session-level transitions: catalog replacement, detail/gallery and cart.
//!
//! These wrap the state machines in `crate::state` with the policies of the
//! interactive surface: navigation errors are logged and swallowed so the
//! visible state never changes on a failed precondition.

use crate::error::CatalogError;
use crate::logic::filter::apply_filters_preserve_selection;
use crate::logic::selection::selected_product_id;
use crate::state::{AppState, CartItem, CatalogStatus, CatalogStore, Modal, Position, ProductId};
use crate::util::format_money;

/// Static message shown in place of the results when loading fails.
pub const CATALOG_FAILURE_MESSAGE: &str = "Erreur de chargement des produits.";

/// What: Install a freshly loaded snapshot, replacing the previous one.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `store`: New catalog snapshot
///
/// Output:
/// - Replaces the catalog, closes detail and gallery views, refreshes the
///   category choices and recomputes results with the current criteria.
///
/// Details:
/// - A category that no longer exists is dropped from the criteria.
pub fn install_catalog(app: &mut AppState, store: CatalogStore) {
    app.detail.close();
    app.categories = store.categories();
    if let Some(cat) = app.criteria.category.as_deref()
        && !app.categories.iter().any(|c| c == cat)
    {
        app.criteria.category = None;
    }
    tracing::info!(count = store.len(), "catalog installed");
    app.catalog = store;
    app.catalog_status = CatalogStatus::Ready;
    app.featured_state.select(None);
    app.custom_state.select(None);
    apply_filters_preserve_selection(app);
    app.status = format!("{} produit(s)", app.catalog.len());
}

/// What: Record a catalog load failure without ending the session.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `err`: Load failure
///
/// Output:
/// - Status becomes `Failed` with the static message; any existing snapshot
///   is kept.
pub fn catalog_failed(app: &mut AppState, err: &CatalogError) {
    tracing::warn!(error = %err, "catalog load failed");
    app.catalog_status = CatalogStatus::Failed(CATALOG_FAILURE_MESSAGE.to_string());
    app.status = CATALOG_FAILURE_MESSAGE.to_string();
}

/// What: Open the detail view on the product highlighted in the focused pane.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when a product was opened.
pub fn open_selected_detail(app: &mut AppState) -> bool {
    let Some(id) = selected_product_id(app) else {
        return false;
    };
    open_detail(app, &id)
}

/// What: Open the detail view on `id`.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `id`: Product to show
///
/// Output:
/// - `true` on success; `false` (state unchanged) for an unknown id.
pub fn open_detail(app: &mut AppState, id: &ProductId) -> bool {
    match app.detail.open(&app.catalog, id) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(error = %e, "detail open rejected");
            false
        }
    }
}

/// Open the gallery at the highlighted thumbnail of the detail product.
pub fn open_gallery(app: &mut AppState) -> Option<Position> {
    app.detail
        .open_gallery_at_thumb(&app.catalog)
        .inspect_err(|e| tracing::debug!(error = %e, "gallery open rejected"))
        .ok()
}

/// Show the next gallery image; silently ignored while closed.
pub fn gallery_next(app: &mut AppState) -> Option<Position> {
    app.detail
        .gallery_next()
        .inspect_err(|e| tracing::debug!(error = %e, "gallery next ignored"))
        .ok()
}

/// Show the previous gallery image; silently ignored while closed.
pub fn gallery_previous(app: &mut AppState) -> Option<Position> {
    app.detail
        .gallery_previous()
        .inspect_err(|e| tracing::debug!(error = %e, "gallery previous ignored"))
        .ok()
}

/// What: Add a product to the demo cart and show the confirmation notice.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `id`: Product to add
///
/// Output:
/// - New cart count, or `None` when `id` is not in the catalog.
pub fn add_to_cart(app: &mut AppState, id: &ProductId) -> Option<usize> {
    let product = app.catalog.get(id)?;
    let item = CartItem::from(product);
    let message = format!("{} ajouté au panier.", item.name);
    let count = app.cart.add(item);
    app.modal = Modal::Alert { message };
    Some(count)
}

/// What: Show the cart contents in an alert.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Sets `app.modal` to an alert listing each line and the total.
pub fn show_cart(app: &mut AppState) {
    let message = if app.cart.is_empty() {
        "Votre panier est vide.".to_string()
    } else {
        let mut lines: Vec<String> = app
            .cart
            .items()
            .iter()
            .map(|i| format!("{} · {}", i.name, format_money(i.price)))
            .collect();
        lines.push(format!("Total: {}", format_money(app.cart.total())));
        lines.join("\n")
    };
    app.modal = Modal::Alert { message };
}

/// Add the detail product if a detail view is open, else the highlighted one.
pub fn add_current_to_cart(app: &mut AppState) -> Option<usize> {
    let id = app
        .detail
        .product_id()
        .cloned()
        .or_else(|| selected_product_id(app))?;
    add_to_cart(app, &id)
}
