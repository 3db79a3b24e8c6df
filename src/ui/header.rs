use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::{i18n, App};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.session.theme.palette();
    let copy = i18n::copy(app.session.language);

    // Split the header into title and status halves
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(area);

    let title = Paragraph::new(copy.title)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);

    f.render_widget(title, chunks[0]);

    let who = match app.session.identity() {
        Some(login) => format!("@{login}"),
        None => copy.guest.to_string(),
    };
    let status = Paragraph::new(format!(
        "{} {}  {}",
        app.session.theme.toggle_icon(),
        app.session.language.toggle_label(),
        who
    ))
    .style(Style::default().fg(palette.muted))
    .alignment(Alignment::Right);

    f.render_widget(status, chunks[1]);
}
