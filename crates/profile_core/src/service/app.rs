//! Application facade wiring the state services.
//!
//! # Responsibility
//! - Construct repository, settings store and notification bus from a
//!   `CoreConfig`, sharing one key-value slot and one clock.
//! - Route notification actions back into the settings store.

use crate::clock::{Clock, SystemClock};
use crate::config::CoreConfig;
use crate::db::{open_db, open_db_in_memory};
use crate::model::notification::NotificationId;
use crate::repo::profile_repo::ProfileRepository;
use crate::service::notification_bus::{NotificationBus, NotificationSink};
use crate::service::settings_store::SettingsStore;
use crate::store::{KeyValueStore, LocalStore, SqliteKvStore, StoreResult};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Notification bus shared between the facade and the settings store.
pub type SharedNotificationBus = Rc<RefCell<NotificationBus>>;

pub struct ProfileApp<K: KeyValueStore> {
    profiles: ProfileRepository<Rc<K>>,
    settings: SettingsStore<Rc<K>, SharedNotificationBus>,
    notifications: SharedNotificationBus,
}

impl ProfileApp<SqliteKvStore> {
    /// Opens (or creates) the configured database and loads all state.
    ///
    /// # Errors
    /// - Returns an error when the database cannot be opened or migrated.
    ///   Corrupt stored records are not errors; they load as defaults.
    pub fn open(config: &CoreConfig) -> StoreResult<Self> {
        let conn = match &config.db_path {
            Some(path) => open_db(path)?,
            None => open_db_in_memory()?,
        };
        Ok(Self::with_store(
            SqliteKvStore::new(conn),
            Rc::new(SystemClock),
            config,
        ))
    }
}

impl<K: KeyValueStore> ProfileApp<K> {
    /// Builds the services over an existing slot and clock.
    pub fn with_store(kv: K, clock: Rc<dyn Clock>, config: &CoreConfig) -> Self {
        let kv = Rc::new(kv);
        let notifications = Rc::new(RefCell::new(NotificationBus::with_default_duration(
            Rc::clone(&clock),
            config.notification_duration_ms,
        )));
        let profiles = ProfileRepository::load(LocalStore::new(Rc::clone(&kv)), clock);
        let settings = SettingsStore::load(LocalStore::new(kv), Rc::clone(&notifications))
            .with_theme_prompt_duration(config.theme_prompt_duration_ms);

        Self {
            profiles,
            settings,
            notifications,
        }
    }

    pub fn profiles(&self) -> &ProfileRepository<Rc<K>> {
        &self.profiles
    }

    pub fn profiles_mut(&mut self) -> &mut ProfileRepository<Rc<K>> {
        &mut self.profiles
    }

    pub fn settings(&self) -> &SettingsStore<Rc<K>, SharedNotificationBus> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore<Rc<K>, SharedNotificationBus> {
        &mut self.settings
    }

    /// Read access to the notification queue.
    ///
    /// Holding the returned guard across a settings mutation panics; drop it
    /// first.
    pub fn notifications(&self) -> Ref<'_, NotificationBus> {
        self.notifications.borrow()
    }

    /// Handle for hosts that subscribe to queue changes.
    pub fn notification_bus(&self) -> SharedNotificationBus {
        Rc::clone(&self.notifications)
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) {
        self.notifications.dismiss(id);
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear_all();
    }

    /// Drops notifications whose auto-dismiss deadline has passed.
    pub fn sweep_notifications(&mut self) -> Vec<NotificationId> {
        self.notifications.borrow_mut().sweep_expired()
    }

    /// Runs action `action_index` of notification `id` and removes it.
    ///
    /// Returns `false` when no such notification or action exists. When the
    /// command fails to persist, the notification stays queued so the user
    /// can answer again.
    pub fn invoke_notification_action(
        &mut self,
        id: NotificationId,
        action_index: usize,
    ) -> StoreResult<bool> {
        let command = self.notifications.borrow().action_command(id, action_index);
        let Some(command) = command else {
            return Ok(false);
        };

        self.settings.apply_command(command)?;
        self.notifications.borrow_mut().invoke_action(id, action_index);
        Ok(true)
    }
}
