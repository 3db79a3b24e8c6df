use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::LoginMenuItem;
use crate::{App, AppScreen};

pub fn handle_draw_input(key: KeyEvent, app: &mut App, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            app.screen = AppScreen::QuitConfirm;
        }
        return;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.start_draw(now),
        KeyCode::Char('t') => app.session.toggle_theme(),
        KeyCode::Char('l') => app.session.toggle_language(),
        KeyCode::Char('g') => {
            app.login_menu_idx = 0;
            app.screen = AppScreen::Login;
        }
        KeyCode::Char('c') => app.session.clear_history(),
        KeyCode::Char('q') | KeyCode::Esc => app.screen = AppScreen::QuitConfirm,
        _ => {}
    }
}

pub fn handle_login_input(key: KeyEvent, app: &mut App, now: Instant) {
    // the fake handshake cannot be cancelled once started
    if app.login.is_authorizing() {
        return;
    }

    let items = app.login_menu_items();
    match key.code {
        KeyCode::Down => {
            app.login_menu_idx = (app.login_menu_idx + 1) % items.len();
        }
        KeyCode::Up => {
            if app.login_menu_idx == 0 {
                app.login_menu_idx = items.len() - 1;
            } else {
                app.login_menu_idx -= 1;
            }
        }
        KeyCode::Enter => match items[app.login_menu_idx] {
            LoginMenuItem::Account(login) => {
                app.login.begin(login, now);
            }
            LoginMenuItem::SignOut => {
                app.login.sign_out();
                app.session.sign_out();
                app.screen = AppScreen::Draw;
            }
            LoginMenuItem::Back => app.screen = AppScreen::Draw,
        },
        KeyCode::Esc => app.screen = AppScreen::Draw,
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Draw;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::store::MemoryStore;

    fn app() -> App {
        App::new(Session::new(Box::new(MemoryStore::new()), 5).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_starts_a_draw() {
        let mut app = app();
        handle_draw_input(key(KeyCode::Char(' ')), &mut app, Instant::now());
        assert!(!app.spin.trigger_enabled());
    }

    #[test]
    fn test_quit_confirm_cancel_returns_to_draw() {
        let mut app = app();
        handle_draw_input(key(KeyCode::Char('q')), &mut app, Instant::now());
        assert_eq!(app.screen, AppScreen::QuitConfirm);

        handle_quit_confirm_input(key(KeyCode::Char('n')), &mut app);
        assert_eq!(app.screen, AppScreen::Draw);

        handle_draw_input(key(KeyCode::Esc), &mut app, Instant::now());
        handle_quit_confirm_input(key(KeyCode::Char('y')), &mut app);
        assert_eq!(app.screen, AppScreen::Quit);
    }

    #[test]
    fn test_login_menu_selection_wraps() {
        let mut app = app();
        app.screen = AppScreen::Login;
        let items = app.login_menu_items().len();

        handle_login_input(key(KeyCode::Up), &mut app, Instant::now());
        assert_eq!(app.login_menu_idx, items - 1);

        handle_login_input(key(KeyCode::Down), &mut app, Instant::now());
        assert_eq!(app.login_menu_idx, 0);
    }

    #[test]
    fn test_selecting_an_account_starts_the_handshake() {
        let mut app = app();
        app.screen = AppScreen::Login;
        handle_login_input(key(KeyCode::Enter), &mut app, Instant::now());
        assert!(app.login.is_authorizing());

        // further input is ignored until the handshake completes
        handle_login_input(key(KeyCode::Esc), &mut app, Instant::now());
        assert_eq!(app.screen, AppScreen::Login);
    }
}
