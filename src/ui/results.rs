use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::CATALOG_FAILURE_MESSAGE;
use crate::state::{AppState, CatalogStatus, Focus};
use crate::theme::theme;
use crate::util::format_money;

/// Column width reserved for product names in the results list.
const NAME_COL: usize = 28;

/// Pad or truncate `s` to exactly `width` display columns.
fn fit_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w <= width {
        return format!("{s}{}", " ".repeat(width - w));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// What: Render the three selectors (category, price bracket, sort).
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (criteria are read only)
/// - `area`: Target rectangle
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let category = app
        .criteria
        .category
        .clone()
        .unwrap_or_else(|| "Toutes".to_string());
    let price = app
        .criteria
        .price_range
        .map_or_else(|| "Tous les prix".to_string(), |r| format_bracket(&r));
    let label = Style::default().fg(th.overlay2);
    let value = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("[c] Catégorie: ", label),
        Span::styled(category, value),
        Span::raw("   "),
        Span::styled("[p] Prix: ", label),
        Span::styled(price, value),
        Span::raw("   "),
        Span::styled("[s] Tri: ", label),
        Span::styled(app.criteria.sort.label(), value),
    ]);
    let line = if app.criteria.is_filtering() {
        let mut spans = line.spans;
        spans.push(Span::styled("   [x] réinitialiser", label));
        Line::from(spans)
    } else {
        line
    };
    let bar = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" Filtres ", Style::default().fg(th.brand_green)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1)),
    );
    f.render_widget(bar, area);
}

/// Human label for a bracket, using formatted amounts.
fn format_bracket(r: &crate::state::PriceRange) -> String {
    if r.max.is_infinite() {
        format!("{} et plus", format_money(r.min))
    } else {
        format!("{} – {}", format_money(r.min), format_money(r.max))
    }
}

/// What: Render the derived results list, or the loading/failure message.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; `list_state` is updated by the widget
/// - `area`: Target rectangle
///
/// Details:
/// - Result ids are resolved against the catalog; a missing id is skipped.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            format!(" Produits ({}) ", app.results.len()),
            Style::default().fg(if focused { th.accent } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.accent } else { th.overlay1 }));

    let message = match &app.catalog_status {
        CatalogStatus::Loading if app.catalog.is_empty() => Some("Chargement des produits…"),
        CatalogStatus::Failed(_) if app.catalog.is_empty() => Some(CATALOG_FAILURE_MESSAGE),
        _ if app.results.is_empty() => Some("Aucun produit ne correspond aux filtres."),
        _ => None,
    };
    if let Some(msg) = message {
        let color = if matches!(app.catalog_status, CatalogStatus::Failed(_)) {
            th.brand_red
        } else {
            th.subtext0
        };
        let p = Paragraph::new(msg)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .filter_map(|id| app.catalog.get(id))
        .map(|p| {
            let mut segs = vec![
                Span::styled(
                    fit_width(&p.name, NAME_COL),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:>14}", format_money(p.price)),
                    Style::default().fg(th.brand_red),
                ),
            ];
            if !p.category.is_empty() {
                segs.push(Span::styled(
                    format!("  {}", p.category),
                    Style::default().fg(th.overlay2),
                ));
            }
            if p.is_custom {
                segs.push(Span::styled("  [sur mesure]", Style::default().fg(th.yellow)));
            }
            ListItem::new(Line::from(segs))
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.accent))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::logic::{catalog_failed, install_catalog};
    use crate::sources::parse_catalog;
    use crate::ui::test_support::render_to_text;

    #[test]
    /// What: Names are padded or truncated to the column width
    ///
    /// - Input: Short and overlong names
    /// - Output: Exact display width with an ellipsis on truncation
    fn fits_names() {
        assert_eq!(fit_width("Sac", 5), "Sac  ");
        let cut = fit_width("Chaussures de ville", 8);
        assert_eq!(UnicodeWidthStr::width(cut.as_str()), 8);
        assert!(cut.ends_with('…'));
    }

    #[test]
    /// What: Failure shows the static message instead of results
    ///
    /// - Input: Failed first load
    /// - Output: Frame contains the failure text
    fn failure_message_rendered() {
        let mut app = AppState::default();
        catalog_failed(&mut app, &CatalogError::Status {
            url: "https://shop.test".into(),
            status: 500,
        });
        let text = render_to_text(&mut app, 120, 30);
        assert!(text.contains(CATALOG_FAILURE_MESSAGE));
    }

    #[test]
    /// What: Results show names with formatted prices
    ///
    /// - Input: Catalog of one product priced 25000
    /// - Output: Name and "25 000 F CFA" rendered
    fn results_rendered_with_money() {
        let mut app = AppState::default();
        let store =
            parse_catalog(r#"[{"id":1,"name":"Baskets","price":25000,"category":"chaussures"}]"#)
                .unwrap();
        install_catalog(&mut app, store);
        let text = render_to_text(&mut app, 120, 30);
        assert!(text.contains("Baskets"));
        assert!(text.contains("25\u{202f}000\u{a0}F\u{a0}CFA"));
    }
}
