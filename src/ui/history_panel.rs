use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::{i18n, App};

/// Projects the history log into its panel: one row per entry, newest
/// first, or the localized empty placeholder. No filtering, no reordering.
pub fn draw_history_panel(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.session.theme.palette();
    let copy = i18n::copy(app.session.language);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(copy.history_heading)
        .style(Style::default().fg(palette.border).bg(palette.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let log = app.session.history();
    if log.is_empty() {
        let placeholder = Paragraph::new(copy.history_empty)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, inner);
        return;
    }

    let rows: Vec<ListItem> = log
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let label_style = if i == 0 {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", entry.occurred_at.format("%m-%d %H:%M")),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(entry.label.clone(), label_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(rows), inner);
}
