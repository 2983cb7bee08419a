//! Settings store: theme, language and background preferences.
//!
//! # Responsibility
//! - Own the in-memory `AppSettings` and persist it on every mutation.
//! - Raise user feedback through a [`NotificationSink`].
//! - Ask once how themes should be handled, until the user has answered.
//!
//! # Invariants
//! - A change is visible in memory only after it was written.
//! - Notification texts use the language active after the change.
//! - `set_custom_themes` never raises a notification.

use crate::i18n::{translations, Translations};
use crate::model::notification::{
    ActionCommand, NotificationAction, NotificationDraft, NotificationKind,
};
use crate::model::settings::{AppSettings, BackgroundPatch, Language, Theme};
use crate::observer::{Observers, SubscriptionId};
use crate::service::notification_bus::NotificationSink;
use crate::store::{KeyValueStore, LocalStore, StoreResult};
use log::{debug, error, info};

/// How long the theme customization prompt stays up.
pub const THEME_PROMPT_DURATION_MS: u64 = 8_000;

pub struct SettingsStore<K: KeyValueStore, N: NotificationSink> {
    store: LocalStore<K>,
    sink: N,
    settings: AppSettings,
    theme_prompt_duration_ms: u64,
    observers: Observers<AppSettings>,
}

impl<K: KeyValueStore, N: NotificationSink> SettingsStore<K, N> {
    /// Loads stored settings, backfilling anything missing from defaults.
    pub fn load(store: LocalStore<K>, sink: N) -> Self {
        let settings = store.load_settings();
        info!(
            "event=settings_load module=settings status=ok theme={} language={}",
            settings.theme.as_str(),
            settings.language.code()
        );
        Self {
            store,
            sink,
            settings,
            theme_prompt_duration_ms: THEME_PROMPT_DURATION_MS,
            observers: Observers::new(),
        }
    }

    pub fn with_theme_prompt_duration(mut self, duration_ms: u64) -> Self {
        self.theme_prompt_duration_ms = duration_ms;
        self
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// String table for the current language.
    pub fn translations(&self) -> &'static Translations {
        translations(self.settings.language)
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Switches theme. While `custom_themes` is unset, also asks the user
    /// whether to keep default themes or use custom ones.
    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        let should_prompt = !self.settings.custom_themes;
        self.commit("settings_theme", |settings| settings.theme = theme)?;

        if should_prompt {
            let texts = &self.translations().notifications.theme_customization;
            let draft = NotificationDraft::new(NotificationKind::Info, texts.title, texts.message)
                .with_duration_ms(self.theme_prompt_duration_ms)
                .with_action(NotificationAction::new(
                    texts.use_default,
                    ActionCommand::SetCustomThemes(false),
                ))
                .with_action(NotificationAction::new(
                    texts.use_custom,
                    ActionCommand::SetCustomThemes(true),
                ));
            self.sink.enqueue(draft);
        }
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.commit("settings_language", |settings| settings.language = language)?;

        let texts = self.translations();
        self.sink.enqueue(NotificationDraft::new(
            NotificationKind::Success,
            texts.common.success,
            texts.notifications.language_changed,
        ));
        Ok(())
    }

    /// Merges `patch` into the background settings field by field.
    pub fn set_background_settings(&mut self, patch: BackgroundPatch) -> StoreResult<()> {
        self.commit("settings_background", |settings| {
            patch.apply_to(&mut settings.background_settings)
        })?;

        let texts = self.translations();
        let message = if patch.touches_only_rain() {
            texts.notifications.rain_toggled
        } else {
            texts.notifications.background_changed
        };
        self.sink.enqueue(NotificationDraft::new(
            NotificationKind::Success,
            texts.common.success,
            message,
        ));
        Ok(())
    }

    pub fn set_custom_themes(&mut self, enabled: bool) -> StoreResult<()> {
        self.commit("settings_custom_themes", |settings| {
            settings.custom_themes = enabled
        })
    }

    /// Executes a command carried by a notification action.
    pub fn apply_command(&mut self, command: ActionCommand) -> StoreResult<()> {
        match command {
            ActionCommand::SetCustomThemes(enabled) => self.set_custom_themes(enabled),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AppSettings) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn commit(&mut self, event: &str, mutate: impl FnOnce(&mut AppSettings)) -> StoreResult<()> {
        let mut next = self.settings.clone();
        mutate(&mut next);

        if let Err(err) = self.store.save_settings(&next) {
            error!(
                "event={event} module=settings status=error error_code=persist_failed error={err}"
            );
            return Err(err);
        }

        self.settings = next;
        debug!("event={event} module=settings status=ok");
        self.observers.notify(&self.settings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsStore;
    use crate::model::notification::{NotificationDraft, NotificationId};
    use crate::model::settings::{BackgroundPatch, Language};
    use crate::service::notification_bus::NotificationSink;
    use crate::store::{LocalStore, MemoryKvStore};
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingSink {
        drafts: Vec<NotificationDraft>,
    }

    impl NotificationSink for RecordingSink {
        fn enqueue(&mut self, draft: NotificationDraft) -> NotificationId {
            self.drafts.push(draft);
            Uuid::new_v4()
        }

        fn dismiss(&mut self, _id: NotificationId) {}

        fn clear_all(&mut self) {
            self.drafts.clear();
        }
    }

    #[test]
    fn language_change_is_announced_in_the_new_language() {
        let mut store = SettingsStore::load(
            LocalStore::new(MemoryKvStore::new()),
            RecordingSink::default(),
        );
        store.set_language(Language::En).unwrap();

        let draft = store.sink().drafts.last().unwrap();
        assert_eq!(draft.title, "Success");
        assert_eq!(draft.message, "Language changed successfully");
    }

    #[test]
    fn rain_toggle_uses_rain_message() {
        let mut store = SettingsStore::load(
            LocalStore::new(MemoryKvStore::new()),
            RecordingSink::default(),
        );
        store.set_language(Language::En).unwrap();
        store
            .set_background_settings(BackgroundPatch::rain_enabled(false))
            .unwrap();
        store
            .set_background_settings(BackgroundPatch::custom_image("data:image/png;base64,AA=="))
            .unwrap();

        let messages: Vec<&str> = store
            .sink()
            .drafts
            .iter()
            .map(|draft| draft.message.as_str())
            .collect();
        assert_eq!(
            messages[1..],
            ["Rain effect updated", "Background updated successfully"]
        );
        assert!(!store.settings().background_settings.rain_enabled);
    }
}
