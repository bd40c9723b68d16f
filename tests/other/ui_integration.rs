//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These drive a session through the event layer and check what the
//! renderer shows at each step.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

use boutik::events::handle_event;
use boutik::logic::install_catalog;
use boutik::sources::parse_catalog;
use boutik::state::AppState;
use boutik::ui;

/// Render the full UI and return the buffer as text.
fn render(app: &mut AppState) -> String {
    let backend = TestBackend::new(140, 40);
    let mut term = Terminal::new(backend).expect("failed to create test terminal");
    term.draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    let buf = term.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut AppState, code: KeyCode) -> bool {
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_event(
        &CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        app,
        &tx,
    )
}

fn session() -> AppState {
    let mut app = AppState::default();
    let store = parse_catalog(
        r#"[
            {"id": 1, "name": "Baskets", "sku": "BK-1", "price": 25000, "category": "chaussures",
             "images": ["bk1.jpg", "bk2.jpg"]},
            {"id": 2, "name": "Sac cuir", "price": 40000, "category": "sacs", "isCustom": true},
            {"id": 3, "name": "Sandales", "price": 10000, "category": "chaussures"}
        ]"#,
    )
    .expect("fixture catalog should parse");
    install_catalog(&mut app, store);
    app
}

#[test]
/// What: Sorting by price reorders the rendered list
///
/// - Input: `s` pressed once (newest → price-low)
/// - Output: "Sandales" rendered above "Baskets"
fn sort_reorders_rendering() {
    let mut app = session();
    press(&mut app, KeyCode::Char('s'));
    let text = render(&mut app);
    let sandales = text.find("Sandales").expect("Sandales shown");
    let baskets = text.find("Baskets").expect("Baskets shown");
    assert!(sandales < baskets);
    assert!(text.contains("Prix croissant"));
}

#[test]
/// What: Viewing a product then its gallery renders both modals
///
/// - Input: Enter, Enter, Right
/// - Output: Second image with the "2 / 2" indicator
fn detail_then_gallery() {
    let mut app = session();
    press(&mut app, KeyCode::Enter);
    let text = render(&mut app);
    assert!(text.contains("BK-1"));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    let text = render(&mut app);
    assert!(text.contains("bk2.jpg"));
    assert!(text.contains("2 / 2"));
}

#[test]
/// What: Adding to cart shows the confirmation and updates the header
///
/// - Input: `a` on the first product
/// - Output: "Baskets ajouté au panier." and a cart count of one
fn add_to_cart_notice() {
    let mut app = session();
    press(&mut app, KeyCode::Char('a'));
    let text = render(&mut app);
    assert!(text.contains("Baskets ajouté au panier."));
    assert!(text.contains("1 article(s)"));
}
