// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shared mutable state store.
//!
//! [`DashboardStore`] is the single source of truth for leave requests,
//! change requests, and per-faculty notification queues. It is an
//! explicitly constructed object: callers create one per session and pass
//! handles into whatever needs it; there is no module-level singleton.
//!
//! Every mutation is one critical section: the collection is updated and
//! all observers are invoked before the lock is released, so observers see
//! only fully applied mutations and delivery order follows registration
//! order. Observers must not call back into the store; doing so would
//! deadlock on the store mutex.

use crate::state::{Observer, StoreState};
use crate::subscription::{SubscriberId, Subscription, TopicKey};
use slotboard_domain::{
    ChangeRequest, Decision, FacultyId, LeaveRequest, Notification, NotificationId, RequestId,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The result of a decision applied to a request collection.
///
/// A decision on a missing id is not an error and not a silent no-op:
/// the outcome is explicit and callers choose what to surface.
/// The store itself never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The request was pending and the decision was applied.
    Applied,
    /// No request with that id exists. Nothing changed, nobody was
    /// notified.
    NotFound,
    /// The request was already decided. A decision is terminal, so the
    /// request is left untouched and nobody is notified.
    AlreadyDecided,
}

impl UpdateOutcome {
    /// Returns true if the decision was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Single source of truth for requests and notifications.
///
/// Cloning the store clones a handle to the same shared state.
#[derive(Clone)]
pub struct DashboardStore {
    state: Arc<Mutex<StoreState>>,
}

impl DashboardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_requests(Vec::new(), Vec::new())
    }

    /// Creates a store pre-populated with request collections.
    #[must_use]
    pub fn with_requests(
        leave_requests: Vec<LeaveRequest>,
        change_requests: Vec<ChangeRequest>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::new(leave_requests, change_requests))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a leave request and fans the updated collection out to
    /// every leave-request observer.
    ///
    /// Submission order is preserved; requests enter the store `Pending`
    /// by construction at the API boundary.
    pub fn add_leave_request(&self, request: LeaveRequest) {
        let mut state = self.lock();
        state.leave_requests.push(request);
        state.notify_leave_observers();
    }

    /// Appends a change request and fans the updated collection out to
    /// every change-request observer.
    pub fn add_change_request(&self, request: ChangeRequest) {
        let mut state = self.lock();
        state.change_requests.push(request);
        state.notify_change_observers();
    }

    /// Applies an administrator decision to a leave request.
    ///
    /// On success the updated collection is delivered to leave-request
    /// observers first, then exactly one notification is appended to the
    /// requester's queue and delivered to that faculty's notification
    /// observers. A missing id or an already-decided request changes
    /// nothing and notifies nobody.
    pub fn decide_leave_request(&self, id: RequestId, decision: Decision) -> UpdateOutcome {
        let mut state = self.lock();
        let Some(index) = state.leave_requests.iter().position(|r| r.id == id) else {
            return UpdateOutcome::NotFound;
        };
        if state.leave_requests[index]
            .status
            .validate_transition(decision.status())
            .is_err()
        {
            return UpdateOutcome::AlreadyDecided;
        }

        state.leave_requests[index].status = decision.status();
        let faculty_id: FacultyId = state.leave_requests[index].faculty_id.clone();
        let message: String = format!(
            "Your leave request for {} has been {}.",
            state.leave_requests[index].date,
            decision.as_lower()
        );

        state.notify_leave_observers();
        Self::push_notification(&mut state, &faculty_id, message, decision);
        UpdateOutcome::Applied
    }

    /// Applies an administrator decision to a change request.
    ///
    /// Same contract as [`Self::decide_leave_request`]; the notification
    /// message names the request's from-slot label.
    pub fn decide_change_request(&self, id: RequestId, decision: Decision) -> UpdateOutcome {
        let mut state = self.lock();
        let Some(index) = state.change_requests.iter().position(|r| r.id == id) else {
            return UpdateOutcome::NotFound;
        };
        if state.change_requests[index]
            .status
            .validate_transition(decision.status())
            .is_err()
        {
            return UpdateOutcome::AlreadyDecided;
        }

        state.change_requests[index].status = decision.status();
        let faculty_id: FacultyId = state.change_requests[index].faculty_id.clone();
        let message: String = format!(
            "Your change request for '{}' has been {}.",
            state.change_requests[index].from_slot,
            decision.as_lower()
        );

        state.notify_change_observers();
        Self::push_notification(&mut state, &faculty_id, message, decision);
        UpdateOutcome::Applied
    }

    /// Prepends a notification to one faculty member's queue (newest
    /// first) and fans out to that partition's observers only.
    pub fn add_notification(
        &self,
        faculty_id: &FacultyId,
        message: String,
        outcome: Decision,
    ) -> NotificationId {
        let mut state = self.lock();
        Self::push_notification(&mut state, faculty_id, message, outcome)
    }

    /// Removes a notification from one faculty member's queue if present
    /// and fans out that partition's updated queue. Removing an absent id
    /// still notifies the partition.
    pub fn remove_notification(&self, faculty_id: &FacultyId, id: NotificationId) {
        let mut state = self.lock();
        if let Some(queue) = state.notifications.get_mut(faculty_id) {
            queue.retain(|n| n.id != id);
        }
        state.notify_notification_observers(faculty_id);
    }

    /// Registers an observer of the leave-request collection.
    ///
    /// The observer is invoked immediately with the current collection
    /// (replay-on-subscribe), so a subscriber never needs a separate read.
    pub fn subscribe_leave_requests(
        &self,
        observer: impl Fn(&[LeaveRequest]) + Send + Sync + 'static,
    ) -> Subscription {
        let observer: Observer<LeaveRequest> = Arc::new(observer);
        let mut state = self.lock();
        let id: SubscriberId = state.next_subscriber;
        state.next_subscriber += 1;
        state.leave_observers.push((id, Arc::clone(&observer)));
        observer(&state.leave_requests);
        Subscription::new(Arc::clone(&self.state), TopicKey::LeaveRequests, id)
    }

    /// Registers an observer of the change-request collection. Same
    /// replay-on-subscribe contract as [`Self::subscribe_leave_requests`].
    pub fn subscribe_change_requests(
        &self,
        observer: impl Fn(&[ChangeRequest]) + Send + Sync + 'static,
    ) -> Subscription {
        let observer: Observer<ChangeRequest> = Arc::new(observer);
        let mut state = self.lock();
        let id: SubscriberId = state.next_subscriber;
        state.next_subscriber += 1;
        state.change_observers.push((id, Arc::clone(&observer)));
        observer(&state.change_requests);
        Subscription::new(Arc::clone(&self.state), TopicKey::ChangeRequests, id)
    }

    /// Registers an observer of one faculty member's notification queue.
    ///
    /// The observer is replayed immediately with the current queue, which
    /// is empty when the faculty member has no prior entries. Observers
    /// for other faculty ids are never invoked by this partition's
    /// mutations.
    pub fn subscribe_notifications(
        &self,
        faculty_id: &FacultyId,
        observer: impl Fn(&[Notification]) + Send + Sync + 'static,
    ) -> Subscription {
        let observer: Observer<Notification> = Arc::new(observer);
        let mut state = self.lock();
        let id: SubscriberId = state.next_subscriber;
        state.next_subscriber += 1;
        state
            .notification_observers
            .entry(faculty_id.clone())
            .or_default()
            .push((id, Arc::clone(&observer)));
        let queue: &[Notification] = state
            .notifications
            .get(faculty_id)
            .map_or(&[], Vec::as_slice);
        observer(queue);
        Subscription::new(
            Arc::clone(&self.state),
            TopicKey::Notifications(faculty_id.clone()),
            id,
        )
    }

    /// Returns a snapshot of the leave-request collection.
    #[must_use]
    pub fn leave_requests(&self) -> Vec<LeaveRequest> {
        self.lock().leave_requests.clone()
    }

    /// Returns a snapshot of the change-request collection.
    #[must_use]
    pub fn change_requests(&self) -> Vec<ChangeRequest> {
        self.lock().change_requests.clone()
    }

    /// Returns a snapshot of one faculty member's notification queue,
    /// newest first.
    #[must_use]
    pub fn notifications_for(&self, faculty_id: &FacultyId) -> Vec<Notification> {
        self.lock()
            .notifications
            .get(faculty_id)
            .cloned()
            .unwrap_or_default()
    }

    fn push_notification(
        state: &mut StoreState,
        faculty_id: &FacultyId,
        message: String,
        outcome: Decision,
    ) -> NotificationId {
        let id: NotificationId = NotificationId::new(state.next_notification);
        state.next_notification += 1;
        let notification = Notification::new(id, faculty_id.clone(), message, outcome);
        state
            .notifications
            .entry(faculty_id.clone())
            .or_default()
            .insert(0, notification);
        state.notify_notification_observers(faculty_id);
        id
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("DashboardStore")
            .field("leave_requests", &state.leave_requests.len())
            .field("change_requests", &state.change_requests.len())
            .field("notification_queues", &state.notifications.len())
            .finish_non_exhaustive()
    }
}
