//! Repository layer for the profile collection.
//!
//! # Responsibility
//! - Own the in-memory profile list and keep durable storage in step with it.
//! - Maintain identity and timestamp invariants.
//!
//! # Invariants
//! - A mutation is visible in memory only after its write succeeded.
//! - Unknown ids on update/remove are a no-op, never an error.

pub mod profile_repo;
