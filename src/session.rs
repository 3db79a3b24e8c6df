// src/session.rs

use log::{info, warn};

use crate::errors::OmikujiResult;
use crate::history::{HistoryEntry, HistoryLog};
use crate::i18n::Language;
use crate::store::{self, Store};
use crate::theme::Theme;

/// Everything owned by one running session: the active identity, the
/// in-memory history, and the persisted preferences. All operations take
/// the session explicitly; there is no module-global state, so independent
/// sessions can coexist.
pub struct Session {
    store: Box<dyn Store>,
    identity: Option<String>,
    log: HistoryLog,
    pub theme: Theme,
    pub language: Language,
}

impl Session {
    pub fn new(store: Box<dyn Store>, capacity: usize) -> OmikujiResult<Self> {
        let mut log = HistoryLog::new(capacity)?;
        log.replace(store::load_history(
            store.as_ref(),
            &store::history_key(None),
        ));
        let theme = Theme::from_storage_token(
            store::load_pref(store.as_ref(), store::THEME_KEY).as_deref(),
        );
        let language = Language::from_storage_token(
            store::load_pref(store.as_ref(), store::LANGUAGE_KEY).as_deref(),
        );
        Ok(Session {
            store,
            identity: None,
            log,
            theme,
            language,
        })
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.log
    }

    fn scope_key(&self) -> String {
        store::history_key(self.identity.as_deref())
    }

    /// Appends a draw result and mirrors the log to the store. A failed
    /// write is logged; the in-memory log stays authoritative for this
    /// session either way.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.log.append(entry);
        let key = self.scope_key();
        if let Err(e) = store::persist_history(self.store.as_mut(), &key, &self.log) {
            warn!("history write under {key} failed, keeping in-memory copy: {e}");
        }
    }

    pub fn sign_in(&mut self, login: &str) {
        info!("signed in as {login}");
        self.identity = Some(login.to_string());
        self.reload();
    }

    pub fn sign_out(&mut self) {
        if let Some(login) = self.identity.take() {
            info!("signed out from {login}");
        }
        self.reload();
    }

    fn reload(&mut self) {
        let key = self.scope_key();
        self.log
            .replace(store::load_history(self.store.as_ref(), &key));
    }

    /// Drops the stored history for the current scope and empties the
    /// in-memory log.
    pub fn clear_history(&mut self) {
        let key = self.scope_key();
        if let Err(e) = self.store.remove(&key) {
            warn!("could not remove stored history under {key}: {e}");
        }
        self.log.clear();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        let token = self.theme.storage_token();
        if let Err(e) = store::persist_pref(self.store.as_mut(), store::THEME_KEY, token) {
            warn!("could not save theme preference: {e}");
        }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        let token = self.language.storage_token();
        if let Err(e) = store::persist_pref(self.store.as_mut(), store::LANGUAGE_KEY, token) {
            warn!("could not save language preference: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    /// A store whose writes always fail, standing in for disabled or
    /// quota-exhausted storage.
    struct RejectingStore;

    impl Store for RejectingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn put(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("write denied".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("write denied".to_string()))
        }
    }

    fn session(capacity: usize) -> Session {
        Session::new(Box::new(MemoryStore::new()), capacity).unwrap()
    }

    #[test]
    fn test_zero_capacity_is_rejected_at_construction() {
        assert!(Session::new(Box::new(MemoryStore::new()), 0).is_err());
    }

    #[test]
    fn test_record_keeps_the_five_most_recent() {
        let mut s = session(5);
        for label in ["A", "B", "C", "D", "E", "F"] {
            s.record(HistoryEntry::new(label));
        }
        let labels: Vec<&str> = s.history().entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_identities_do_not_share_history() {
        let mut s = session(10);

        s.sign_in("x");
        s.record(HistoryEntry::new("大吉"));

        s.sign_in("y");
        assert!(s.history().is_empty());

        s.sign_in("x");
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().entries()[0].label, "大吉");
    }

    #[test]
    fn test_signing_out_returns_to_the_anonymous_scope() {
        let mut s = session(5);
        s.record(HistoryEntry::new("吉"));

        s.sign_in("octocat");
        assert!(s.history().is_empty());
        s.record(HistoryEntry::new("凶"));

        s.sign_out();
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().entries()[0].label, "吉");
    }

    #[test]
    fn test_appends_survive_a_store_that_rejects_every_write() {
        let mut s = Session::new(Box::new(RejectingStore), 5).unwrap();
        for label in ["大吉", "中吉", "小吉"] {
            s.record(HistoryEntry::new(label));
        }
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.history().entries()[0].label, "小吉");
    }

    #[test]
    fn test_clear_history_empties_memory_and_store() {
        let mut s = session(5);
        s.record(HistoryEntry::new("吉"));
        s.clear_history();
        assert!(s.history().is_empty());

        // a reload of the same scope sees nothing either
        s.sign_in("octocat");
        s.sign_out();
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_preferences_round_trip_through_the_store() {
        let mut store = MemoryStore::new();
        store.put(store::THEME_KEY, "dark").unwrap();
        store.put(store::LANGUAGE_KEY, "en").unwrap();

        let s = Session::new(Box::new(store), 5).unwrap();
        assert_eq!(s.theme, Theme::Dark);
        assert_eq!(s.language, Language::En);
    }

    #[test]
    fn test_toggles_flip_state_even_when_writes_fail() {
        let mut s = Session::new(Box::new(RejectingStore), 5).unwrap();
        let theme = s.theme;
        let language = s.language;
        s.toggle_theme();
        s.toggle_language();
        assert_ne!(s.theme, theme);
        assert_ne!(s.language, language);
    }
}
