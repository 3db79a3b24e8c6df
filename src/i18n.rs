// src/i18n.rs

use crate::fortune::Fortune;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ja,
    En,
}

impl Language {
    pub fn toggle(self) -> Language {
        match self {
            Language::Ja => Language::En,
            Language::En => Language::Ja,
        }
    }

    pub fn storage_token(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// Unknown or missing tokens fall back to Japanese, the default.
    pub fn from_storage_token(token: Option<&str>) -> Language {
        match token {
            Some("en") => Language::En,
            _ => Language::Ja,
        }
    }

    /// Label for the language toggle: the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Ja => "EN",
            Language::En => "JA",
        }
    }
}

/// All user-visible copy for one language.
#[derive(Debug)]
pub struct UiCopy {
    pub title: &'static str,
    pub draw_button: &'static str,
    pub description: &'static str,
    pub spinning: &'static str,
    pub history_heading: &'static str,
    pub history_empty: &'static str,
    pub login_heading: &'static str,
    pub guest: &'static str,
    pub sign_out: &'static str,
    pub back: &'static str,
    pub authorizing: &'static str,
    pub quit_question: &'static str,
    pub hints_draw: &'static str,
    pub hints_login: &'static str,
    pub hints_quit: &'static str,
}

static JA: UiCopy = UiCopy {
    title: "🎋 おみくじ 🎋",
    draw_button: "おみくじを回す",
    description: "スペースキーを押して、今日の運勢を占おう！",
    spinning: "運勢を占っています…",
    history_heading: "履歴",
    history_empty: "まだ結果がありません",
    login_heading: "GitHub でサインイン",
    guest: "ゲスト",
    sign_out: "サインアウト",
    back: "戻る",
    authorizing: "認証中…",
    quit_question: "終了しますか？",
    hints_draw: "Space: おみくじを回す  t: テーマ  l: 言語  g: サインイン  c: 履歴を消す  q: 終了",
    hints_login: "↑/↓: 選択  Enter: 決定  Esc: 戻る",
    hints_quit: "y: 終了  n: キャンセル",
};

static EN: UiCopy = UiCopy {
    title: "🎋 Fortune Telling 🎋",
    draw_button: "Draw Fortune",
    description: "Press Space to see your fortune today!",
    spinning: "Consulting the fates…",
    history_heading: "History",
    history_empty: "No draws yet",
    login_heading: "Sign in with GitHub",
    guest: "guest",
    sign_out: "Sign out",
    back: "Back",
    authorizing: "Authorizing…",
    quit_question: "Are you sure you want to quit?",
    hints_draw: "Space: draw  t: theme  l: language  g: sign in  c: clear history  q: quit",
    hints_login: "Up/Down: select  Enter: confirm  Esc: back",
    hints_quit: "y: quit  n: cancel",
};

pub fn copy(language: Language) -> &'static UiCopy {
    match language {
        Language::Ja => &JA,
        Language::En => &EN,
    }
}

const JA_FORTUNES: [&str; 6] = ["大吉", "中吉", "小吉", "吉", "凶", "大凶"];
const EN_FORTUNES: [&str; 6] = [
    "Great Blessing",
    "Middle Blessing",
    "Small Blessing",
    "Blessing",
    "Bad Luck",
    "Great Curse",
];

pub fn fortune_label(language: Language, fortune: Fortune) -> &'static str {
    let table = match language {
        Language::Ja => &JA_FORTUNES,
        Language::En => &EN_FORTUNES,
    };
    table[fortune as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::ALL_FORTUNES;

    #[test]
    fn test_toggle_flips_between_the_two_languages() {
        assert_eq!(Language::Ja.toggle(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Ja);
    }

    #[test]
    fn test_storage_token_round_trip() {
        for language in [Language::Ja, Language::En] {
            let token = language.storage_token();
            assert_eq!(Language::from_storage_token(Some(token)), language);
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_japanese() {
        assert_eq!(Language::from_storage_token(None), Language::Ja);
        assert_eq!(Language::from_storage_token(Some("fr")), Language::Ja);
    }

    #[test]
    fn test_every_fortune_has_a_label_in_both_languages() {
        for fortune in ALL_FORTUNES {
            assert!(!fortune_label(Language::Ja, fortune).is_empty());
            assert!(!fortune_label(Language::En, fortune).is_empty());
        }
        assert_eq!(
            JA_FORTUNES.to_vec(),
            vec!["大吉", "中吉", "小吉", "吉", "凶", "大凶"]
        );
    }
}
