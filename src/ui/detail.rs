//! Product detail modal.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::modals::centered_rect;
use crate::util::format_money;

/// What: Render the detail modal for the open product.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state with an open detail view
/// - `area`: Full screen area used to center the modal
///
/// Details:
/// - Draws nothing if the product is no longer in the catalog.
/// - The thumbnail strip marks the image the gallery will open at.
pub fn render_detail(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(p) = app.detail.product(&app.catalog) else {
        return;
    };
    let th = theme();
    let label = Style::default().fg(th.overlay2);
    let sku = if p.sku.is_empty() { "—" } else { p.sku.as_str() };
    let mut lines = vec![
        Line::from(Span::styled(
            format_money(p.price),
            Style::default().fg(th.brand_red).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Réf: ", label),
            Span::raw(sku.to_string()),
            Span::styled("   Catégorie: ", label),
            Span::raw(p.category.clone()),
        ]),
    ];
    if !p.sizes.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tailles: ", label),
            Span::raw(p.sizes.join(", ")),
        ]));
    }
    if !p.colors.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Couleurs: ", label),
            Span::raw(p.colors.join(", ")),
        ]));
    }
    lines.push(Line::from(""));
    if !p.description.is_empty() {
        lines.push(Line::from(Span::styled(
            p.description.clone(),
            Style::default().fg(th.text),
        )));
        lines.push(Line::from(""));
    }
    if p.images.is_empty() {
        lines.push(Line::from(Span::styled(
            "Aucune image",
            Style::default().fg(th.subtext0),
        )));
    } else {
        let thumb = app.detail.thumb();
        let mut strip = vec![Span::styled("Images: ", label)];
        for i in 0..p.images.len() {
            let style = if i == thumb {
                Style::default().fg(th.base).bg(th.accent)
            } else {
                Style::default().fg(th.subtext0)
            };
            strip.push(Span::styled(format!("[{}]", i + 1), style));
            strip.push(Span::raw(" "));
        }
        lines.push(Line::from(strip));
        if let Some(img) = p.images.get(thumb) {
            lines.push(Line::from(Span::styled(img.clone(), Style::default().fg(th.overlay1))));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←→ image · Entrée agrandir · a ajouter au panier · w WhatsApp · Échap fermer",
        Style::default().fg(th.overlay1),
    )));

    let rect = centered_rect(area, 76, 22);
    f.render_widget(Clear, rect);
    let modal = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", p.name),
                    Style::default().fg(th.brand_green).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.brand_green))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(modal, rect);
}
