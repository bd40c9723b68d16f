//! Keys for the product detail modal and its image gallery.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{add_current_to_cart, gallery_next, gallery_previous, open_gallery};
use crate::state::AppState;
use crate::util::{open_url, whatsapp_link};

/// What: Handle a key while the detail view is open and the gallery is closed.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Details:
/// - Left/Right move the thumbnail cursor that seeds the gallery start index.
pub fn handle_detail_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.detail.close();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.detail.move_thumb(&app.catalog, -1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.detail.move_thumb(&app.catalog, 1);
        }
        KeyCode::Enter | KeyCode::Char('z') => {
            open_gallery(app);
        }
        KeyCode::Char('a') => {
            add_current_to_cart(app);
        }
        KeyCode::Char('w') => {
            if let Some(p) = app.detail.product(&app.catalog) {
                open_url(&whatsapp_link(&app.whatsapp_number, &p.name, &p.sku));
            }
        }
        _ => {}
    }
}

/// Handle a key while the gallery is open.
pub fn handle_gallery_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => app.detail.close_gallery(),
        KeyCode::Left | KeyCode::Char('h') => {
            gallery_previous(app);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            gallery_next(app);
        }
        _ => {}
    }
}
