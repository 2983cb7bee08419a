//! Store adapter for the two persisted records.
//!
//! # Invariants
//! - Loads never fail: absent, corrupt or unreadable data yields defaults.
//! - A loaded profile list never contains two records with the same id.
//! - Every loaded profile has `updated_at >= created_at`.
//! - Saves write the complete record under its fixed key.

use super::migrate::migrate_settings;
use super::{KeyValueStore, StoreResult};
use crate::model::profile::Profile;
use crate::model::settings::AppSettings;
use log::{error, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Key of the profile collection record.
pub const PROFILES_KEY: &str = "profile-manager-profiles";
/// Key of the settings record.
pub const SETTINGS_KEY: &str = "profile-manager-settings";

/// JSON adapter over a [`KeyValueStore`].
#[derive(Debug)]
pub struct LocalStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> LocalStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Reads the stored profile collection.
    ///
    /// Entries that fail to decode are skipped; later duplicates of an id are
    /// dropped. An absent or undecodable record yields an empty list.
    pub fn load_profiles(&self) -> Vec<Profile> {
        match self.kv.get(PROFILES_KEY) {
            Ok(Some(raw)) => decode_profiles(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                error!(
                    "event=store_load module=store status=error record=profiles error_code=read_failed error={err}"
                );
                Vec::new()
            }
        }
    }

    pub fn save_profiles(&self, profiles: &[Profile]) -> StoreResult<()> {
        let encoded = serde_json::to_string(profiles)?;
        self.kv.set(PROFILES_KEY, &encoded)
    }

    /// Reads stored settings, backfilling missing fields from defaults.
    pub fn load_settings(&self) -> AppSettings {
        match self.kv.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => migrate_settings(&value),
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=degraded record=settings error_code=parse_failed error={err}"
                    );
                    AppSettings::default()
                }
            },
            Ok(None) => AppSettings::default(),
            Err(err) => {
                error!(
                    "event=store_load module=store status=error record=settings error_code=read_failed error={err}"
                );
                AppSettings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &AppSettings) -> StoreResult<()> {
        let encoded = serde_json::to_string(settings)?;
        self.kv.set(SETTINGS_KEY, &encoded)
    }
}

fn decode_profiles(raw: &str) -> Vec<Profile> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!(
                "event=store_load module=store status=degraded record=profiles error_code=not_an_array"
            );
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=degraded record=profiles error_code=parse_failed error={err}"
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let mut seen = HashSet::with_capacity(total);
    let mut profiles = Vec::with_capacity(total);

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Profile>(item) {
            Ok(mut profile) if seen.insert(profile.id.clone()) => {
                if profile.updated_at < profile.created_at {
                    warn!(
                        "event=store_load module=store status=degraded record=profiles index={index} error_code=updated_before_created"
                    );
                    profile.updated_at = profile.created_at;
                }
                profiles.push(profile);
            }
            Ok(_) => warn!(
                "event=store_load module=store status=degraded record=profiles index={index} error_code=duplicate_id"
            ),
            Err(err) => warn!(
                "event=store_load module=store status=degraded record=profiles index={index} error_code=invalid_entry error={err}"
            ),
        }
    }

    profiles
}
