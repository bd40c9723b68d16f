use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

/// Key bindings listed in the help overlay.
const HELP_LINES: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Naviguer dans la liste"),
    ("Tab", "Changer de panneau"),
    ("Entrée", "Voir le produit"),
    ("c / p / s", "Catégorie / prix / tri"),
    ("x", "Réinitialiser les filtres"),
    ("a", "Ajouter au panier"),
    ("b", "Voir le panier"),
    ("←/→", "Image précédente / suivante"),
    ("w", "Demander sur WhatsApp"),
    ("m / d", "Carte / itinéraire"),
    ("R", "Recharger le catalogue"),
    ("Échap", "Fermer"),
    ("q", "Quitter"),
];

/// What: Center a `w`×`h` rectangle in `area`, clamped to fit.
///
/// Inputs:
/// - `area`: Outer rectangle
/// - `w`, `h`: Desired size
///
/// Output:
/// - Centered rectangle no larger than `area` minus a margin.
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(4));
    let h = h.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Draw the active overlay, if any.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => {
            let mut lines = vec![Line::from("")];
            lines.extend(message.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Entrée pour continuer",
                Style::default().fg(theme().overlay1),
            )));
            let h = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
            render_box(f, area, " Panier ", lines, h);
        }
        Modal::Help => {
            let th = theme();
            let lines: Vec<Line<'static>> = HELP_LINES
                .iter()
                .map(|(k, v)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{k:<12}"),
                            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw((*v).to_string()),
                    ])
                })
                .collect();
            let h = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
            render_box(f, area, " Aide ", lines, h);
        }
    }
}

/// Centered bordered box on the mantle background.
fn render_box(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, h: u16) {
    let th = theme();
    let rect = centered_rect(area, 56, h);
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(th.brand_red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.brand_red))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
