use crate::logic::{catalog_failed, install_catalog};
use crate::sources::MapEmbed;
use crate::state::AppState;

use super::background::CatalogResult;

/// What: Apply a finished catalog load to the session.
///
/// Inputs:
/// - `app`: Application state
/// - `result`: Snapshot or load failure
///
/// Details:
/// - Success replaces the store wholesale and closes open views.
/// - Failure shows the static message; the session continues.
pub fn handle_catalog_result(app: &mut AppState, result: CatalogResult) {
    match result {
        Ok(store) => install_catalog(app, store),
        Err(e) => catalog_failed(app, &e),
    }
}

/// Store the resolved map panel.
pub fn handle_map(app: &mut AppState, map: MapEmbed) {
    tracing::debug!(map = ?map, "[Runtime] map panel resolved");
    app.map = Some(map);
}
