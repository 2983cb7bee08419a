//! Time source injected into services that stamp records or schedule
//! auto-dismiss deadlines.
//!
//! # Invariants
//! - Timestamps are UTC and truncated to whole milliseconds, matching the
//!   precision of the persisted ISO-8601 form.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::cell::Cell;

/// Instant in time used for `createdAt`/`updatedAt` and notification deadlines.
pub type Timestamp = DateTime<Utc>;

/// Source of "now".
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        truncate_to_millis(Utc::now())
    }
}

/// Manually driven clock for deterministic tests and host-controlled replay.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(truncate_to_millis(start)),
        }
    }

    /// Moves the clock forward by `millis` milliseconds.
    pub fn advance_ms(&self, millis: i64) {
        self.now.set(self.now.get() + TimeDelta::milliseconds(millis));
    }

    pub fn set(&self, at: Timestamp) {
        self.now.set(truncate_to_millis(at));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

pub(crate) fn truncate_to_millis(at: Timestamp) -> Timestamp {
    at.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(at)
}
