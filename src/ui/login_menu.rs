use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::LoginMenuItem;
use crate::constants::SPINNER_FRAMES;
use crate::{i18n, App};

pub fn draw_login_menu(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.session.theme.palette();
    let copy = i18n::copy(app.session.language);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(copy.login_heading)
        .style(Style::default().fg(palette.border).bg(palette.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.login.is_authorizing() {
        let frame = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        let paragraph = Paragraph::new(format!("{} {}", frame, copy.authorizing))
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    }

    let items = app.login_menu_items();
    let mut menu_lines = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let text = match item {
            LoginMenuItem::Account(login) => format!("@{login}"),
            LoginMenuItem::SignOut => copy.sign_out.to_string(),
            LoginMenuItem::Back => copy.back.to_string(),
        };
        let selected = i == app.login_menu_idx;
        let style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        menu_lines.push(Line::from(Span::styled(
            format!("{} {}", if selected { "▶" } else { " " }, text),
            style,
        )));
    }

    let menu_line_count = menu_lines.len() as u16;
    let menu_par = Paragraph::new(menu_lines).alignment(Alignment::Center);

    let menu_vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(30),
                Constraint::Length(menu_line_count),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(inner);

    f.render_widget(menu_par, menu_vert[1]);
}
