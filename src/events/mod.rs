//! Event handling layer for Boutik's TUI.
//!
//! This module exposes `handle_event` and delegates overlay, detail/gallery
//! and mouse handling to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{
    add_current_to_cart, cycle_category, cycle_price, cycle_sort, focus_next, move_sel,
    open_selected_detail, reset_criteria, show_cart,
};
use crate::state::{AppState, Modal};
use crate::util::{directions_link, open_url};

mod detail;
mod modals;
mod mouse;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Mutable application state
/// - `reload_tx`: Channel used to request a catalog reload
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Precedence: overlays, then the gallery, then the detail view, then the
///   main screen. Each layer swallows the keys it handles.
pub fn handle_event(ev: &CEvent, app: &mut AppState, reload_tx: &mpsc::UnboundedSender<()>) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            if app.modal.is_active() {
                modals::handle_modal_key(*ke, app);
                return false;
            }
            if app.detail.gallery().is_open() {
                detail::handle_gallery_key(*ke, app);
                return false;
            }
            if app.detail.is_open() {
                detail::handle_detail_key(*ke, app);
                return false;
            }
            handle_main_key(*ke, app, reload_tx)
        }
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(*me, app);
            false
        }
        _ => false,
    }
}

/// Keys of the main screen (results and side panes).
fn handle_main_key(ke: KeyEvent, app: &mut AppState, reload_tx: &mpsc::UnboundedSender<()>) -> bool {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => move_sel(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_sel(app, 1),
        KeyCode::PageUp => move_sel(app, -10),
        KeyCode::PageDown => move_sel(app, 10),
        KeyCode::Tab => focus_next(app),
        KeyCode::Enter => {
            open_selected_detail(app);
        }
        KeyCode::Char('c') => cycle_category(app),
        KeyCode::Char('p') => cycle_price(app),
        KeyCode::Char('s') => cycle_sort(app),
        KeyCode::Char('x') => reset_criteria(app),
        KeyCode::Char('a') => {
            add_current_to_cart(app);
        }
        KeyCode::Char('b') => show_cart(app),
        KeyCode::Char('R') => {
            tracing::info!("catalog reload requested");
            let _ = reload_tx.send(());
        }
        KeyCode::Char('d') => open_url(&directions_link(&app.store_address)),
        KeyCode::Char('m') => {
            if let Some(map) = &app.map {
                open_url(&map.url());
            }
        }
        KeyCode::Char('?') => app.modal = Modal::Help,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::install_catalog;
    use crate::sources::parse_catalog;
    use crate::state::Focus;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> AppState {
        let mut app = AppState::default();
        let store = parse_catalog(
            r#"[{"id":1,"name":"Baskets","price":25000,"category":"chaussures","images":["a","b","c"]},
                {"id":2,"name":"Sac","price":15000,"category":"sacs","isCustom":true}]"#,
        )
        .unwrap();
        install_catalog(&mut app, store);
        app
    }

    #[test]
    /// What: Keys drive the detail then gallery state machines and back out
    ///
    /// - Input: Enter, Enter, Right, Esc, Esc
    /// - Output: Detail open, gallery at 2/3, then both closed in order
    fn detail_and_gallery_flow() {
        let mut app = app();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(!handle_event(&key(KeyCode::Enter), &mut app, &tx));
        assert!(app.detail.is_open());
        handle_event(&key(KeyCode::Enter), &mut app, &tx);
        handle_event(&key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.detail.gallery().position().map(|p| p.index), Some(1));
        handle_event(&key(KeyCode::Esc), &mut app, &tx);
        assert!(!app.detail.gallery().is_open());
        assert!(app.detail.is_open());
        assert!(!handle_event(&key(KeyCode::Esc), &mut app, &tx));
        assert!(!app.detail.is_open());
    }

    #[test]
    /// What: Main screen keys cycle criteria, add to cart and quit
    ///
    /// - Input: `c`, `a`, Enter on the alert, Tab, `R`, `q`
    /// - Output: Category set, cart of one, focus moved, reload sent, exit
    fn main_screen_keys() {
        let mut app = app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_event(&key(KeyCode::Char('c')), &mut app, &tx);
        assert_eq!(app.criteria.category.as_deref(), Some("chaussures"));
        handle_event(&key(KeyCode::Char('a')), &mut app, &tx);
        assert_eq!(app.cart.len(), 1);
        assert!(app.modal.is_active());
        handle_event(&key(KeyCode::Enter), &mut app, &tx);
        assert!(!app.modal.is_active());
        handle_event(&key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focus, Focus::Featured);
        handle_event(&key(KeyCode::Char('R')), &mut app, &tx);
        assert!(rx.try_recv().is_ok());
        assert!(handle_event(&key(KeyCode::Char('q')), &mut app, &tx));
    }

    #[test]
    /// What: Overlays swallow keys
    ///
    /// - Input: `?` then `q`
    /// - Output: Help open; `q` does not exit and leaves the help open
    fn help_swallows_keys() {
        let mut app = app();
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_event(&key(KeyCode::Char('?')), &mut app, &tx);
        assert_eq!(app.modal, Modal::Help);
        assert!(!handle_event(&key(KeyCode::Char('q')), &mut app, &tx));
        assert_eq!(app.modal, Modal::Help);
    }
}
