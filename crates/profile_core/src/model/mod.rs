//! Domain model for profiles, settings and notifications.
//!
//! # Responsibility
//! - Define the records held in memory and written to durable storage.
//! - Own the boundary checks applied before data reaches a service.
//!
//! # Invariants
//! - Every profile is identified by a stable `ProfileId`.
//! - Persisted field names are camelCase and stable across versions.

pub mod notification;
pub mod profile;
pub mod settings;
