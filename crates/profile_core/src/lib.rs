//! Core state and persistence for the profile manager.
//! This crate is the single source of truth for profile and settings
//! invariants; presentation layers only issue commands and subscribe.

pub mod clock;
pub mod config;
pub mod db;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod observer;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::CoreConfig;
pub use i18n::{translations, Translations};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::notification::{
    ActionCommand, Notification, NotificationAction, NotificationDraft, NotificationId,
    NotificationKind,
};
pub use model::profile::{
    Feeling, PointKind, Profile, ProfileFormData, ProfileId, ProfileValidationError,
};
pub use model::settings::{AppSettings, BackgroundPatch, BackgroundSettings, Language, Theme};
pub use observer::SubscriptionId;
pub use repo::profile_repo::{ProfileChange, ProfileRepository};
pub use search::query::{ProfileQuery, SortKey};
pub use search::stats::ProfileStats;
pub use service::app::{ProfileApp, SharedNotificationBus};
pub use service::notification_bus::{NotificationBus, NotificationChange, NotificationSink};
pub use service::settings_store::SettingsStore;
pub use store::{KeyValueStore, LocalStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
