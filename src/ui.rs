// src/ui.rs

pub mod footer;
pub mod fortune_panel;
pub mod header;
pub mod history_panel;
pub mod login_menu;
pub mod quit_confirm;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::{App, AppScreen};

/// Renders the whole frame for the current screen.
pub fn ui(f: &mut Frame<'_>, app: &App) {
    let palette = app.session.theme.palette();

    let background = Block::default().style(Style::default().bg(palette.bg).fg(palette.fg));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(history_height(app)),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::draw_header(f, chunks[0], app);

    match app.screen {
        AppScreen::Login => login_menu::draw_login_menu(f, chunks[1], app),
        AppScreen::QuitConfirm | AppScreen::Quit => {
            quit_confirm::draw_quit_confirm(f, chunks[1], app)
        }
        AppScreen::Draw => fortune_panel::draw_fortune_panel(f, chunks[1], app),
    }

    history_panel::draw_history_panel(f, chunks[2], app);
    footer::draw_footer(f, chunks[3], app);
}

fn history_height(app: &App) -> u16 {
    // one row per entry plus the border, never taller than ten rows
    (app.session.history().capacity().min(10) as u16) + 2
}
