//! Durable storage for the profile collection and settings.
//!
//! # Responsibility
//! - Provide the key-value slot contract and its SQLite/in-memory backends.
//! - Encode and decode the two persisted records as JSON.
//! - Upgrade settings written by older versions.
//!
//! # Invariants
//! - Malformed stored content never surfaces as an error; readers fall back
//!   to defaults.
//! - Records are written whole; there is no partial update of a key.

mod error;
mod kv;
mod local_store;
pub mod migrate;

pub use error::{StoreError, StoreResult};
pub use kv::{KeyValueStore, MemoryKvStore, SqliteKvStore};
pub use local_store::{LocalStore, PROFILES_KEY, SETTINGS_KEY};
