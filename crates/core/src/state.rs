// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::subscription::SubscriberId;
use slotboard_domain::{ChangeRequest, FacultyId, LeaveRequest, Notification};
use std::collections::HashMap;
use std::sync::Arc;

/// Observer callback for a request collection topic.
///
/// Observers receive the full updated collection, never a delta.
pub(crate) type Observer<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// The store's single guarded state: authoritative collections, per-faculty
/// notification queues, observer registries, and id counters.
///
/// Every mutation computes the full updated collection before any observer
/// runs, and observers run in registration order, so an observer never sees
/// a partially applied mutation.
pub(crate) struct StoreState {
    /// All leave requests, in submission order. Never trimmed.
    pub(crate) leave_requests: Vec<LeaveRequest>,
    /// All change requests, in submission order. Never trimmed.
    pub(crate) change_requests: Vec<ChangeRequest>,
    /// Notification queues keyed by owning faculty id, newest first.
    pub(crate) notifications: HashMap<FacultyId, Vec<Notification>>,
    /// Observers of the leave-request collection, in registration order.
    pub(crate) leave_observers: Vec<(SubscriberId, Observer<LeaveRequest>)>,
    /// Observers of the change-request collection, in registration order.
    pub(crate) change_observers: Vec<(SubscriberId, Observer<ChangeRequest>)>,
    /// Observers of one faculty member's notification queue.
    pub(crate) notification_observers: HashMap<FacultyId, Vec<(SubscriberId, Observer<Notification>)>>,
    /// Next subscriber id, shared across all topics.
    pub(crate) next_subscriber: u64,
    /// Next notification id.
    pub(crate) next_notification: u64,
}

impl StoreState {
    pub(crate) fn new(
        leave_requests: Vec<LeaveRequest>,
        change_requests: Vec<ChangeRequest>,
    ) -> Self {
        Self {
            leave_requests,
            change_requests,
            notifications: HashMap::new(),
            leave_observers: Vec::new(),
            change_observers: Vec::new(),
            notification_observers: HashMap::new(),
            next_subscriber: 0,
            next_notification: 0,
        }
    }

    /// Delivers the current leave-request collection to every observer.
    pub(crate) fn notify_leave_observers(&self) {
        for (_, observer) in &self.leave_observers {
            observer(&self.leave_requests);
        }
    }

    /// Delivers the current change-request collection to every observer.
    pub(crate) fn notify_change_observers(&self) {
        for (_, observer) in &self.change_observers {
            observer(&self.change_requests);
        }
    }

    /// Delivers one faculty member's current queue to that partition's
    /// observers only.
    pub(crate) fn notify_notification_observers(&self, faculty_id: &FacultyId) {
        let Some(observers) = self.notification_observers.get(faculty_id) else {
            return;
        };
        let queue: &[Notification] = self
            .notifications
            .get(faculty_id)
            .map_or(&[], Vec::as_slice);
        for (_, observer) in observers {
            observer(queue);
        }
    }
}
