//! Translation lookup used for notification texts.
//!
//! # Responsibility
//! - Map a `Language` to its static string table.
//!
//! # Invariants
//! - Every supported language has a complete table; lookup cannot fail.
//! - Core code never branches on translated content.

mod tables;

use crate::model::profile::Feeling;
use crate::model::settings::Language;

/// Labels for the three feelings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeelingTexts {
    pub good: &'static str,
    pub bad: &'static str,
    pub neutral: &'static str,
}

impl FeelingTexts {
    pub fn label(&self, feeling: Feeling) -> &'static str {
        match feeling {
            Feeling::Good => self.good,
            Feeling::Bad => self.bad,
            Feeling::Neutral => self.neutral,
        }
    }
}

/// Texts of the theme customization prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeCustomizationTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub use_default: &'static str,
    pub use_custom: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTexts {
    pub theme_customization: ThemeCustomizationTexts,
    pub background_changed: &'static str,
    pub language_changed: &'static str,
    pub rain_toggled: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonTexts {
    pub error: &'static str,
    pub success: &'static str,
}

/// String table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub feelings: FeelingTexts,
    pub notifications: NotificationTexts,
    pub common: CommonTexts,
}

/// Returns the table for `language`.
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Es => &tables::ES,
        Language::En => &tables::EN,
        Language::Pl => &tables::PL,
        Language::It => &tables::IT,
        Language::Uk => &tables::UK,
        Language::Ru => &tables::RU,
    }
}
