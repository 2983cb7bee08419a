//! Core configuration.
//!
//! Hosts build a `CoreConfig` in code or decode it from JSON; missing keys
//! take their defaults. Nothing is read from the environment.

use crate::model::notification::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::service::settings_store::THEME_PROMPT_DURATION_MS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Database file name hosts conventionally place under their data directory.
pub const DEFAULT_DB_FILE_NAME: &str = "profile_manager.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    /// SQLite file backing the store; `None` keeps everything in memory.
    pub db_path: Option<PathBuf>,
    /// Auto-dismiss delay for notifications that do not set one.
    pub notification_duration_ms: u64,
    /// Auto-dismiss delay of the theme customization prompt.
    pub theme_prompt_duration_ms: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            theme_prompt_duration_ms: THEME_PROMPT_DURATION_MS,
        }
    }
}

impl CoreConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed config using [`DEFAULT_DB_FILE_NAME`] inside `data_dir`.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            db_path: Some(data_dir.as_ref().join(DEFAULT_DB_FILE_NAME)),
            ..Self::default()
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
