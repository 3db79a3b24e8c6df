// src/theme.rs

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn storage_token(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only "dark" selects the dark theme; anything else is light.
    pub fn from_storage_token(token: Option<&str>) -> Theme {
        match token {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Icon for the theme toggle: the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Colors consumed by every draw function.
#[derive(Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
}

static LIGHT: Palette = Palette {
    bg: Color::White,
    fg: Color::Black,
    border: Color::Red,
    accent: Color::Red,
    muted: Color::DarkGray,
    selection_fg: Color::White,
    selection_bg: Color::Red,
};

static DARK: Palette = Palette {
    bg: Color::Black,
    fg: Color::White,
    border: Color::LightYellow,
    accent: Color::LightMagenta,
    muted: Color::DarkGray,
    selection_fg: Color::Black,
    selection_bg: Color::LightMagenta,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_token_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            let token = theme.storage_token();
            assert_eq!(Theme::from_storage_token(Some(token)), theme);
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_light() {
        assert_eq!(Theme::from_storage_token(None), Theme::Light);
        assert_eq!(Theme::from_storage_token(Some("solarized")), Theme::Light);
    }
}
