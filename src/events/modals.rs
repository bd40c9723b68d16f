use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// Handle a key while an overlay (alert or help) is shown.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    match app.modal {
        Modal::Alert { .. } | Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
        }
        Modal::None => {}
    }
}
