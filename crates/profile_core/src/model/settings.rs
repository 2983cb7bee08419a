//! Application settings model.
//!
//! # Invariants
//! - `AppSettings::default()` is the documented first-run state.
//! - Background updates go through `BackgroundPatch::apply_to`, one field at
//!   a time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IMAGE_DATA_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/[A-Za-z0-9.+-]+;base64,[A-Za-z0-9+/=\s]+$")
        .expect("valid data uri regex")
});

/// Visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Frutiger,
    Cyberpunk,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Frutiger, Theme::Cyberpunk];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Frutiger => "frutiger",
            Self::Cyberpunk => "cyberpunk",
        }
    }
}

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
    Pl,
    It,
    Uk,
    Ru,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Es,
        Language::En,
        Language::Pl,
        Language::It,
        Language::Uk,
        Language::Ru,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Pl => "pl",
            Self::It => "it",
            Self::Uk => "uk",
            Self::Ru => "ru",
        }
    }
}

/// Background effect preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSettings {
    /// Uploaded image as a data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
    pub rain_enabled: bool,
    pub use_default_rain: bool,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            custom_image: None,
            rain_enabled: true,
            use_default_rain: true,
        }
    }
}

/// Partial background update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundPatch {
    /// `Some(None)` removes the custom image.
    pub custom_image: Option<Option<String>>,
    pub rain_enabled: Option<bool>,
    pub use_default_rain: Option<bool>,
}

impl BackgroundPatch {
    pub fn custom_image(image: impl Into<String>) -> Self {
        Self {
            custom_image: Some(Some(image.into())),
            ..Self::default()
        }
    }

    pub fn remove_custom_image() -> Self {
        Self {
            custom_image: Some(None),
            ..Self::default()
        }
    }

    pub fn rain_enabled(enabled: bool) -> Self {
        Self {
            rain_enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn use_default_rain(enabled: bool) -> Self {
        Self {
            use_default_rain: Some(enabled),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.custom_image.is_none() && self.rain_enabled.is_none() && self.use_default_rain.is_none()
    }

    /// True when only the rain toggles are touched.
    pub fn touches_only_rain(&self) -> bool {
        self.custom_image.is_none()
            && (self.rain_enabled.is_some() || self.use_default_rain.is_some())
    }

    /// Merges the set fields into `target`, leaving the rest as they are.
    pub fn apply_to(&self, target: &mut BackgroundSettings) {
        if let Some(image) = &self.custom_image {
            target.custom_image = image.clone();
        }
        if let Some(enabled) = self.rain_enabled {
            target.rain_enabled = enabled;
        }
        if let Some(enabled) = self.use_default_rain {
            target.use_default_rain = enabled;
        }
    }
}

/// User-level preferences persisted independently of profiles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub language: Language,
    pub background_settings: BackgroundSettings,
    /// Whether the user already answered the theme customization prompt.
    pub custom_themes: bool,
}

/// Returns whether `value` looks like a base64 image data URI.
pub fn is_custom_image_data_uri(value: &str) -> bool {
    IMAGE_DATA_URI_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_custom_image_data_uri, AppSettings, BackgroundPatch, Language, Theme};

    #[test]
    fn defaults_match_first_run_state() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Default);
        assert_eq!(settings.language, Language::Es);
        assert!(settings.background_settings.rain_enabled);
        assert!(settings.background_settings.use_default_rain);
        assert!(settings.background_settings.custom_image.is_none());
        assert!(!settings.custom_themes);
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut background = AppSettings::default().background_settings;
        BackgroundPatch::custom_image("data:image/png;base64,AAAA").apply_to(&mut background);
        BackgroundPatch::rain_enabled(false).apply_to(&mut background);

        assert_eq!(
            background.custom_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert!(!background.rain_enabled);
        assert!(background.use_default_rain);

        BackgroundPatch::remove_custom_image().apply_to(&mut background);
        assert!(background.custom_image.is_none());
        assert!(!background.rain_enabled);
    }

    #[test]
    fn rain_only_patch_detection() {
        assert!(BackgroundPatch::rain_enabled(true).touches_only_rain());
        assert!(!BackgroundPatch::remove_custom_image().touches_only_rain());
        assert!(!BackgroundPatch::default().touches_only_rain());
        assert!(BackgroundPatch::default().is_empty());
    }

    #[test]
    fn language_codes_match_stored_form() {
        for language in Language::ALL {
            assert_eq!(serde_json::to_value(language).unwrap(), language.code());
        }
    }

    #[test]
    fn data_uri_check_accepts_images_only() {
        assert!(is_custom_image_data_uri("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_custom_image_data_uri("data:image/svg+xml;base64,PHN2Zz4="));
        assert!(!is_custom_image_data_uri("data:text/plain;base64,aGk="));
        assert!(!is_custom_image_data_uri("https://example.com/bg.png"));
    }

    #[test]
    fn custom_image_is_omitted_when_absent() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert!(json["backgroundSettings"].get("customImage").is_none());
        assert_eq!(json["theme"], "default");
        assert_eq!(json["language"], "es");
        assert_eq!(json["customThemes"], false);
    }
}
