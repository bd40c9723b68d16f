//! Right-hand column: featured products, custom-order products and the map.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::logic::query;
use crate::state::{AppState, Focus, Product};
use crate::theme::theme;
use crate::util::format_money;

/// Shown in a projection pane with nothing to list.
pub const EMPTY_PANE_PLACEHOLDER: &str = "Bientôt disponible…";

/// Render featured, custom and map panes stacked vertically.
pub fn render_side_column(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(area);

    let featured: Vec<&Product> = query::featured(app.catalog.products(), app.featured_count)
        .iter()
        .collect();
    render_projection(
        f,
        chunks[0],
        " À la une ",
        &featured,
        app.focus == Focus::Featured,
        &mut app.featured_state,
    );
    let custom = query::custom(app.catalog.products());
    render_projection(
        f,
        chunks[1],
        " Sur mesure ",
        &custom,
        app.focus == Focus::Custom,
        &mut app.custom_state,
    );
    render_map(f, app, chunks[2]);
}

/// What: Render one projection pane (featured or custom).
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Target rectangle
/// - `title`: Pane title
/// - `products`: Projection output
/// - `focused`: Whether the pane has focus
/// - `state`: Pane selection state
///
/// Details:
/// - An empty projection shows [`EMPTY_PANE_PLACEHOLDER`].
fn render_projection(
    f: &mut Frame,
    area: Rect,
    title: &str,
    products: &[&Product],
    focused: bool,
    state: &mut ListState,
) {
    let th = theme();
    let border = if focused { th.accent } else { th.overlay1 };
    let block = Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(th.brand_green)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    if products.is_empty() {
        let p = Paragraph::new(EMPTY_PANE_PLACEHOLDER)
            .style(Style::default().fg(th.subtext0))
            .block(block);
        f.render_widget(p, area);
        return;
    }
    let items: Vec<ListItem> = products
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(p.name.clone(), Style::default().fg(th.text)),
                Span::styled(
                    format!("  {}", format_money(p.price)),
                    Style::default().fg(th.brand_red),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.accent))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, state);
}

/// Map panel: label, URL and address, with key hints.
fn render_map(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let (label, url) = app.map.as_ref().map_or_else(
        || ("Carte".to_string(), "Chargement de la carte…".to_string()),
        |m| (m.label().to_string(), m.url()),
    );
    let lines = vec![
        Line::from(Span::styled(
            app.store_address.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(url, Style::default().fg(th.overlay2))),
        Line::from(Span::styled(
            "[m] ouvrir la carte · [d] itinéraire",
            Style::default().fg(th.overlay1),
        )),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(format!(" {label} "), Style::default().fg(th.brand_green)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1)),
    );
    f.render_widget(p, area);
}
