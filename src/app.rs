use std::time::{Duration, Instant};

use crate::constants::SPINNER_FRAME_INTERVAL_MS;
use crate::fortune::Fortune;
use crate::history::HistoryEntry;
use crate::login::{LoginEvent, LoginFlow, MOCK_ACCOUNTS};
use crate::session::Session;
use crate::spin::{SpinCycle, SpinEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Draw,
    Login,
    QuitConfirm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMenuItem {
    Account(&'static str),
    SignOut,
    Back,
}

pub struct App {
    pub screen: AppScreen,
    pub session: Session,
    pub spin: SpinCycle,
    pub login: LoginFlow,
    pub login_menu_idx: usize,
    pub revealed: Option<Fortune>,
    pub spinner_frame: usize,
    last_frame_update: Instant,
}

impl App {
    pub fn new(session: Session) -> App {
        App {
            screen: AppScreen::Draw,
            session,
            spin: SpinCycle::new(),
            login: LoginFlow::new(),
            login_menu_idx: 0,
            revealed: None,
            spinner_frame: 0,
            last_frame_update: Instant::now(),
        }
    }

    /// Starts a draw if the trigger is enabled; ignored while one is in
    /// flight.
    pub fn start_draw(&mut self, now: Instant) {
        if self.spin.start(now) {
            self.revealed = None;
        }
    }

    /// Advances the spinner animation and any due spin or login
    /// transition. Called on every UI tick.
    pub fn on_tick(&mut self, now: Instant) {
        if self.spin.is_spinning()
            && now.duration_since(self.last_frame_update)
                >= Duration::from_millis(SPINNER_FRAME_INTERVAL_MS)
        {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.last_frame_update = now;
        }

        match self.spin.advance(now) {
            Some(SpinEvent::Reveal) => {
                let fortune = Fortune::draw();
                let label = fortune.label(self.session.language);
                self.session.record(HistoryEntry::new(label));
                self.revealed = Some(fortune);
            }
            Some(SpinEvent::Settle) | None => {}
        }

        if let Some(LoginEvent::Authorized(login)) = self.login.advance(now) {
            self.session.sign_in(&login);
            self.screen = AppScreen::Draw;
        }
    }

    /// Items shown on the login screen, in display order.
    pub fn login_menu_items(&self) -> Vec<LoginMenuItem> {
        let mut items = Vec::new();
        if self.session.identity().is_none() {
            items.extend(MOCK_ACCOUNTS.iter().copied().map(LoginMenuItem::Account));
        } else {
            items.push(LoginMenuItem::SignOut);
        }
        items.push(LoginMenuItem::Back);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::spin::{REVEAL_DELAY, SETTLE_DELAY};
    use crate::store::MemoryStore;

    fn app() -> App {
        App::new(Session::new(Box::new(MemoryStore::new()), 5).unwrap())
    }

    #[test]
    fn test_reveal_records_exactly_one_history_entry() {
        let mut app = app();
        let t0 = Instant::now();

        app.start_draw(t0);
        assert!(app.revealed.is_none());
        assert!(app.session.history().is_empty());

        app.on_tick(t0 + REVEAL_DELAY);
        assert!(app.revealed.is_some());
        assert_eq!(app.session.history().len(), 1);

        app.on_tick(t0 + REVEAL_DELAY + SETTLE_DELAY);
        assert!(app.spin.trigger_enabled());
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn test_retrigger_during_a_spin_is_ignored() {
        let mut app = app();
        let t0 = Instant::now();

        app.start_draw(t0);
        app.start_draw(t0 + Duration::from_millis(100));
        app.on_tick(t0 + REVEAL_DELAY);
        app.start_draw(t0 + Duration::from_millis(600));
        app.on_tick(t0 + REVEAL_DELAY + SETTLE_DELAY);

        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn test_completed_login_switches_scope_and_screen() {
        let mut app = app();
        let t0 = Instant::now();

        app.screen = AppScreen::Login;
        app.login.begin("octocat", t0);
        app.on_tick(t0 + crate::login::AUTH_DELAY);

        assert_eq!(app.screen, AppScreen::Draw);
        assert_eq!(app.session.identity(), Some("octocat"));
    }

    #[test]
    fn test_login_menu_reflects_identity() {
        let mut app = app();
        assert_eq!(
            app.login_menu_items(),
            vec![
                LoginMenuItem::Account("octocat"),
                LoginMenuItem::Account("mona"),
                LoginMenuItem::Account("hubot"),
                LoginMenuItem::Back,
            ]
        );

        app.session.sign_in("mona");
        assert_eq!(
            app.login_menu_items(),
            vec![LoginMenuItem::SignOut, LoginMenuItem::Back]
        );
    }
}
