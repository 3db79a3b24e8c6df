use crate::{i18n, App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic key hints
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.session.theme.palette();
    let copy = i18n::copy(app.session.language);

    let instructions = match app.screen {
        AppScreen::Draw => copy.hints_draw,
        AppScreen::Login => copy.hints_login,
        AppScreen::QuitConfirm | AppScreen::Quit => copy.hints_quit,
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
