//! Notification records queued for the user.
//!
//! Actions carry an [`ActionCommand`] instead of a callback so the queue
//! stays plain data; whoever owns the settings store executes the command.

use crate::clock::Timestamp;
use uuid::Uuid;

pub type NotificationId = Uuid;

/// Auto-dismiss delay applied when a draft does not specify one.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5_000;

/// Severity/intent of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Effect of invoking a notification action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCommand {
    SetCustomThemes(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    pub label: String,
    pub command: ActionCommand,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, command: ActionCommand) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

/// Notification as submitted, before the bus assigns identity and timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// `None` uses [`DEFAULT_NOTIFICATION_DURATION_MS`]; `Some(0)` disables
    /// auto-dismiss.
    pub duration_ms: Option<u64>,
    pub actions: Vec<NotificationAction>,
}

impl NotificationDraft {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: None,
            actions: Vec::new(),
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Effective auto-dismiss delay; `0` means it stays until dismissed.
    pub duration_ms: u64,
    pub actions: Vec<NotificationAction>,
    pub enqueued_at: Timestamp,
}

impl Notification {
    /// Instant at which auto-dismiss removes this notification, if any.
    pub fn expires_at(&self) -> Option<Timestamp> {
        if self.duration_ms == 0 {
            return None;
        }
        let millis = i64::try_from(self.duration_ms).unwrap_or(i64::MAX);
        self.enqueued_at
            .checked_add_signed(chrono::TimeDelta::try_milliseconds(millis)?)
    }
}
