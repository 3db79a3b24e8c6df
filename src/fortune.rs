// src/fortune.rs

use rand::Rng;

use crate::i18n::{self, Language};

/// The six possible draw outcomes. The outcome is language-independent;
/// display text is a function of the outcome and the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fortune {
    GreatBlessing,
    MiddleBlessing,
    SmallBlessing,
    Blessing,
    BadLuck,
    GreatCurse,
}

pub const ALL_FORTUNES: [Fortune; 6] = [
    Fortune::GreatBlessing,
    Fortune::MiddleBlessing,
    Fortune::SmallBlessing,
    Fortune::Blessing,
    Fortune::BadLuck,
    Fortune::GreatCurse,
];

impl Fortune {
    /// Uniform draw from the fixed set.
    pub fn draw() -> Fortune {
        let mut rng = rand::rng();
        ALL_FORTUNES[rng.random_range(0..ALL_FORTUNES.len())]
    }

    pub fn label(self, language: Language) -> &'static str {
        i18n::fortune_label(language, self)
    }
}
