// src/login.rs

use std::time::{Duration, Instant};

use log::info;

/// Accounts offered by the mocked sign-in flow. There is no network and
/// there are no tokens; a chosen account only scopes the history.
pub const MOCK_ACCOUNTS: [&str; 3] = ["octocat", "mona", "hubot"];

/// How long the fake authorization handshake takes.
pub const AUTH_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoginPhase {
    SignedOut,
    Authorizing { login: String, done_at: Instant },
    SignedIn { login: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Authorized(String),
}

#[derive(Debug)]
pub struct LoginFlow {
    phase: LoginPhase,
}

impl LoginFlow {
    pub fn new() -> Self {
        LoginFlow {
            phase: LoginPhase::SignedOut,
        }
    }

    pub fn current(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::SignedIn { login } => Some(login),
            _ => None,
        }
    }

    pub fn is_authorizing(&self) -> bool {
        matches!(self.phase, LoginPhase::Authorizing { .. })
    }

    /// Starts the fake handshake for `login`. Only valid while signed out.
    pub fn begin(&mut self, login: &str, now: Instant) -> bool {
        if !matches!(self.phase, LoginPhase::SignedOut) {
            return false;
        }
        info!("authorizing {login}");
        self.phase = LoginPhase::Authorizing {
            login: login.to_string(),
            done_at: now + AUTH_DELAY,
        };
        true
    }

    pub fn advance(&mut self, now: Instant) -> Option<LoginEvent> {
        if let LoginPhase::Authorizing { login, done_at } = &self.phase {
            if now >= *done_at {
                let login = login.clone();
                self.phase = LoginPhase::SignedIn {
                    login: login.clone(),
                };
                return Some(LoginEvent::Authorized(login));
            }
        }
        None
    }

    pub fn sign_out(&mut self) -> bool {
        if matches!(self.phase, LoginPhase::SignedIn { .. }) {
            self.phase = LoginPhase::SignedOut;
            true
        } else {
            false
        }
    }
}
