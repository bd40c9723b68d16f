use crossterm::event::{MouseEvent, MouseEventKind};

use crate::logic::{gallery_next, gallery_previous, move_sel};
use crate::state::AppState;

/// What: Handle mouse wheel input.
///
/// Inputs:
/// - `me`: Mouse event
/// - `app`: Mutable application state
///
/// Details:
/// - The wheel steps the gallery when it is open, otherwise the focused pane.
/// - Ignored while an overlay or a bare detail view is shown.
pub fn handle_mouse_event(me: MouseEvent, app: &mut AppState) {
    if app.modal.is_active() {
        return;
    }
    let gallery_open = app.detail.gallery().is_open();
    if app.detail.is_open() && !gallery_open {
        return;
    }
    match (me.kind, gallery_open) {
        (MouseEventKind::ScrollDown, true) => {
            gallery_next(app);
        }
        (MouseEventKind::ScrollUp, true) => {
            gallery_previous(app);
        }
        (MouseEventKind::ScrollDown, false) => move_sel(app, 1),
        (MouseEventKind::ScrollUp, false) => move_sel(app, -1),
        _ => {}
    }
}
