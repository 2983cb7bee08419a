//! In-memory profile queries.
//!
//! # Responsibility
//! - Text search, feeling/rating filters and sort over a collection snapshot.
//! - Summary statistics for the settings view.
//!
//! # Invariants
//! - Queries are pure functions of their input slice.
//! - Filters are independent predicates; applying them in any order yields
//!   the same set.

pub mod query;
pub mod stats;
