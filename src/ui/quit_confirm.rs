use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{i18n, App};

pub fn draw_quit_confirm(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.session.theme.palette();
    let copy = i18n::copy(app.session.language);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(palette.border).bg(palette.bg));

    f.render_widget(block, area);

    let paragraph = Paragraph::new(format!("\n{}", copy.quit_question))
        .style(
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
