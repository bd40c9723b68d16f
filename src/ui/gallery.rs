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

/// What: Render the full-size image viewer with its position indicator.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state with an open gallery
/// - `area`: Full screen area used to center the modal
///
/// Details:
/// - Renders only when the gallery is open; a closed gallery's images are
///   never shown.
pub fn render_gallery(f: &mut Frame, app: &AppState, area: Rect) {
    let gallery = app.detail.gallery();
    let (Some(pos), Some(image)) = (gallery.position(), gallery.current_image()) else {
        return;
    };
    let th = theme();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            image.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(pos.to_string(), Style::default().fg(th.accent))),
        Line::from(""),
        Line::from(Span::styled(
            "← précédente · → suivante · Échap fermer",
            Style::default().fg(th.overlay1),
        )),
    ];
    let rect = centered_rect(area, 64, 10);
    f.render_widget(Clear, rect);
    let w = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Galerie ", Style::default().fg(th.accent)))
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(th.accent)),
        );
    f.render_widget(w, rect);
}
