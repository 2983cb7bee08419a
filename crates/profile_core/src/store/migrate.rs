//! Settings upgrade from older stored shapes.
//!
//! Each field is read on its own. A missing or unreadable field takes its
//! default while every readable field is kept, so data saved before a field
//! existed (or with a value this build does not know) still loads.

use crate::model::settings::{AppSettings, BackgroundSettings};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Builds settings from a stored JSON value, backfilling field by field.
///
/// Non-object input yields [`AppSettings::default`].
pub fn migrate_settings(raw: &Value) -> AppSettings {
    let Some(object) = raw.as_object() else {
        debug!("event=settings_migrate module=store status=ok backfilled=all");
        return AppSettings::default();
    };

    let defaults = AppSettings::default();
    let mut backfilled: Vec<&'static str> = Vec::new();

    let theme = read_field(object, "theme", &mut backfilled).unwrap_or(defaults.theme);
    let language = read_field(object, "language", &mut backfilled).unwrap_or(defaults.language);
    let custom_themes =
        read_field(object, "customThemes", &mut backfilled).unwrap_or(defaults.custom_themes);
    let background_settings = match object.get("backgroundSettings").and_then(Value::as_object) {
        Some(background) => migrate_background(background, &mut backfilled),
        None => {
            backfilled.push("backgroundSettings");
            BackgroundSettings::default()
        }
    };

    if !backfilled.is_empty() {
        debug!(
            "event=settings_migrate module=store status=ok backfilled={}",
            backfilled.join(",")
        );
    }

    AppSettings {
        theme,
        language,
        background_settings,
        custom_themes,
    }
}

fn migrate_background(
    object: &Map<String, Value>,
    backfilled: &mut Vec<&'static str>,
) -> BackgroundSettings {
    let defaults = BackgroundSettings::default();
    // Absent means "no image", which is not a backfill.
    let custom_image = object
        .get("customImage")
        .and_then(Value::as_str)
        .map(str::to_string);

    BackgroundSettings {
        custom_image,
        rain_enabled: read_field(object, "rainEnabled", backfilled)
            .unwrap_or(defaults.rain_enabled),
        use_default_rain: read_field(object, "useDefaultRain", backfilled)
            .unwrap_or(defaults.use_default_rain),
    }
}

fn read_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &'static str,
    backfilled: &mut Vec<&'static str>,
) -> Option<T> {
    let value = object
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok());
    if value.is_none() {
        backfilled.push(key);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::migrate_settings;
    use crate::model::settings::{AppSettings, Language, Theme};
    use serde_json::json;

    #[test]
    fn legacy_shape_without_new_fields_is_backfilled() {
        let settings = migrate_settings(&json!({ "theme": "cyberpunk", "language": "en" }));
        assert_eq!(settings.theme, Theme::Cyberpunk);
        assert_eq!(settings.language, Language::En);
        assert!(!settings.custom_themes);
        assert!(settings.background_settings.rain_enabled);
        assert!(settings.background_settings.use_default_rain);
    }

    #[test]
    fn unknown_value_falls_back_for_that_field_only() {
        let settings = migrate_settings(&json!({
            "theme": "vaporwave",
            "language": "pl",
            "customThemes": true,
            "backgroundSettings": { "rainEnabled": false }
        }));
        assert_eq!(settings.theme, Theme::Default);
        assert_eq!(settings.language, Language::Pl);
        assert!(settings.custom_themes);
        assert!(!settings.background_settings.rain_enabled);
        assert!(settings.background_settings.use_default_rain);
    }

    #[test]
    fn custom_image_is_kept_verbatim() {
        let blank = migrate_settings(&json!({ "backgroundSettings": { "customImage": "" } }));
        assert_eq!(blank.background_settings.custom_image.as_deref(), Some(""));

        let absent = migrate_settings(&json!({ "backgroundSettings": {} }));
        assert_eq!(absent.background_settings.custom_image, None);
    }

    #[test]
    fn non_object_yields_defaults() {
        assert_eq!(migrate_settings(&json!([1, 2, 3])), AppSettings::default());
        assert_eq!(migrate_settings(&json!(null)), AppSettings::default());
    }
}
