use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::constants::{
    HEAVY_DOWN_AND_LEFT, HEAVY_DOWN_AND_RIGHT, HEAVY_HORIZONTAL, HEAVY_UP_AND_LEFT,
    HEAVY_UP_AND_RIGHT, HEAVY_VERTICAL, SPINNER_FRAMES,
};
use crate::{i18n, App};

pub fn draw_fortune_panel(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.session.theme.palette();
    let copy = i18n::copy(app.session.language);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(copy.draw_button)
        .style(Style::default().fg(palette.border).bg(palette.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(30),
                Constraint::Length(4),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(inner);

    let lines = if app.spin.is_spinning() {
        let frame = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        vec![
            Line::from(Span::styled(
                frame,
                Style::default().fg(palette.accent),
            )),
            Line::from(Span::styled(
                copy.spinning,
                Style::default().fg(palette.muted),
            )),
        ]
    } else if let Some(fortune) = app.revealed {
        let style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        card_lines(fortune.label(app.session.language))
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            copy.description,
            Style::default().fg(palette.fg),
        ))]
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[1]);
}

/// A heavy-bordered card around the label, sized by display width so CJK
/// labels line up.
fn card_lines(label: &str) -> Vec<String> {
    let width = label.width() + 2;
    let bar: String = std::iter::repeat(HEAVY_HORIZONTAL).take(width).collect();
    vec![
        format!("{HEAVY_DOWN_AND_RIGHT}{bar}{HEAVY_DOWN_AND_LEFT}"),
        format!("{HEAVY_VERTICAL} {label} {HEAVY_VERTICAL}"),
        format!("{HEAVY_UP_AND_RIGHT}{bar}{HEAVY_UP_AND_LEFT}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_rows_share_one_display_width() {
        for label in ["大吉", "Great Blessing", "吉"] {
            let rows = card_lines(label);
            assert_eq!(rows.len(), 3);
            let widths: Vec<usize> = rows.iter().map(|row| row.width()).collect();
            assert_eq!(widths[0], widths[1]);
            assert_eq!(widths[1], widths[2]);
        }
    }
}
