//! Queue of transient user-facing notifications.
//!
//! # Responsibility
//! - Assign identity and auto-dismiss deadlines to submitted drafts.
//! - Remove entries on explicit dismiss, action invocation, expiry or clear.
//!
//! # Invariants
//! - No two queued notifications share an id.
//! - Removal is idempotent.
//! - A notification with `duration_ms == 0` is never removed by expiry.
//!
//! Timers are deadlines: the host calls [`NotificationBus::sweep_expired`]
//! from its event loop, scheduling the wake-up with
//! [`NotificationBus::next_deadline`].

use crate::clock::{Clock, Timestamp};
use crate::model::notification::{
    ActionCommand, Notification, NotificationDraft, NotificationId,
    DEFAULT_NOTIFICATION_DURATION_MS,
};
use crate::observer::{Observers, SubscriptionId};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Write side of the queue, as seen by services that raise notifications.
pub trait NotificationSink {
    fn enqueue(&mut self, draft: NotificationDraft) -> NotificationId;
    fn dismiss(&mut self, id: NotificationId);
    fn clear_all(&mut self);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Rc<RefCell<S>> {
    fn enqueue(&mut self, draft: NotificationDraft) -> NotificationId {
        self.borrow_mut().enqueue(draft)
    }

    fn dismiss(&mut self, id: NotificationId) {
        self.borrow_mut().dismiss(id);
    }

    fn clear_all(&mut self) {
        self.borrow_mut().clear_all();
    }
}

/// Queue change emitted to subscribers.
///
/// A shared bus is still mutably borrowed while listeners run, so an
/// enqueue carries the whole notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationChange {
    Enqueued(Notification),
    Dismissed(NotificationId),
    Cleared,
}

pub struct NotificationBus {
    clock: Rc<dyn Clock>,
    default_duration_ms: u64,
    queue: Vec<Notification>,
    observers: Observers<NotificationChange>,
}

impl NotificationBus {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self::with_default_duration(clock, DEFAULT_NOTIFICATION_DURATION_MS)
    }

    /// Uses `default_duration_ms` for drafts without an explicit duration.
    pub fn with_default_duration(clock: Rc<dyn Clock>, default_duration_ms: u64) -> Self {
        Self {
            clock,
            default_duration_ms,
            queue: Vec::new(),
            observers: Observers::new(),
        }
    }

    /// Queued notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.queue
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.queue.iter().find(|notification| notification.id == id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes `id`. Returns whether it was queued.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.queue.iter().position(|notification| notification.id == id) else {
            return false;
        };
        self.queue.remove(index);
        self.observers.notify(&NotificationChange::Dismissed(id));
        true
    }

    /// Command behind action `action_index` of notification `id`, without
    /// removing anything.
    pub fn action_command(&self, id: NotificationId, action_index: usize) -> Option<ActionCommand> {
        self.get(id)?
            .actions
            .get(action_index)
            .map(|action| action.command)
    }

    /// Invokes action `action_index` of notification `id`.
    ///
    /// The notification is removed and the action's command returned for the
    /// caller to execute. Unknown ids or indexes change nothing.
    pub fn invoke_action(&mut self, id: NotificationId, action_index: usize) -> Option<ActionCommand> {
        let command = self.action_command(id, action_index)?;
        self.remove(id);
        debug!("event=notification_action module=notify status=ok index={action_index}");
        Some(command)
    }

    /// Removes every notification whose deadline has passed.
    ///
    /// Returns the removed ids in queue order.
    pub fn sweep_expired(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();
        let expired: Vec<NotificationId> = self
            .queue
            .iter()
            .filter(|notification| notification.expires_at().is_some_and(|at| at <= now))
            .map(|notification| notification.id)
            .collect();

        for id in &expired {
            self.remove(*id);
        }
        expired
    }

    /// Earliest pending auto-dismiss deadline.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.queue
            .iter()
            .filter_map(Notification::expires_at)
            .min()
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&NotificationChange) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn fresh_id(&self) -> NotificationId {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

impl NotificationSink for NotificationBus {
    fn enqueue(&mut self, draft: NotificationDraft) -> NotificationId {
        let notification = Notification {
            id: self.fresh_id(),
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            duration_ms: draft.duration_ms.unwrap_or(self.default_duration_ms),
            actions: draft.actions,
            enqueued_at: self.clock.now(),
        };
        let id = notification.id;
        debug!(
            "event=notification_enqueue module=notify status=ok kind={:?} duration_ms={} actions={}",
            notification.kind,
            notification.duration_ms,
            notification.actions.len()
        );
        self.queue.push(notification.clone());
        self.observers.notify(&NotificationChange::Enqueued(notification));
        id
    }

    fn dismiss(&mut self, id: NotificationId) {
        self.remove(id);
    }

    fn clear_all(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        self.queue.clear();
        self.observers.notify(&NotificationChange::Cleared);
    }
}
