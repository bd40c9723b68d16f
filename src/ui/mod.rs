//! ratatui renderer for the storefront.
//!
//! The screen is a header, a filter bar, the results list beside the
//! featured/custom/map column, and a status footer. Detail, gallery and
//! overlay modals draw on top in that order.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::format_money;

mod detail;
mod gallery;
mod modals;
mod panes;
mod results;

/// Draw one frame of the whole application.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, rows[0]);
    results::render_filter_bar(f, app, rows[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[2]);
    results::render_results(f, app, body[0]);
    panes::render_side_column(f, app, body[1]);

    render_footer(f, app, rows[3]);

    if app.detail.is_open() {
        detail::render_detail(f, app, area);
    }
    if app.detail.gallery().is_open() {
        gallery::render_gallery(f, app, area);
    }
    modals::render_modal(f, app, area);
}

/// Shop name on the left, cart summary on the right.
fn render_header(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let cart = format!(
        "Panier: {} article(s) · {}",
        app.cart.len(),
        format_money(app.cart.total())
    );
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.store_name),
            Style::default()
                .fg(th.brand_green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(cart, Style::default().fg(th.brand_red)),
    ]);
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.mantle)), area);
}

/// Status text plus a short key reminder.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.status), Style::default().fg(th.subtext0)),
        Span::styled(
            " ↑↓ naviguer · Entrée voir · c/p/s filtres · x réinitialiser · a panier · ? aide · q quitter",
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.mantle)), area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::state::AppState;

    /// Render the full UI into an off-screen buffer and return its text.
    pub fn render_to_text(app: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut term = Terminal::new(backend).expect("failed to create test terminal");
        term.draw(|f| super::ui(f, app))
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
}
