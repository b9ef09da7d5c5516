// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::StoreState;
use slotboard_domain::FacultyId;
use std::sync::{Arc, Mutex, PoisonError};

/// Identifies one registered observer within the store.
pub(crate) type SubscriberId = u64;

/// The topic an observer is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TopicKey {
    /// The leave-request collection.
    LeaveRequests,
    /// The change-request collection.
    ChangeRequests,
    /// One faculty member's notification queue.
    Notifications(FacultyId),
}

/// Cancellation token returned by every subscribe call.
///
/// Cancelling removes the observer from its topic registry by id, so
/// calling [`Subscription::cancel`] more than once is harmless. Dropping a
/// subscription without cancelling leaves the observer registered for the
/// life of the store; unsubscription is always an explicit call.
pub struct Subscription {
    state: Arc<Mutex<StoreState>>,
    topic: TopicKey,
    id: SubscriberId,
}

impl Subscription {
    pub(crate) const fn new(
        state: Arc<Mutex<StoreState>>,
        topic: TopicKey,
        id: SubscriberId,
    ) -> Self {
        Self { state, topic, id }
    }

    /// Removes this observer from its topic. Idempotent.
    pub fn cancel(&self) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match &self.topic {
            TopicKey::LeaveRequests => {
                state.leave_observers.retain(|(id, _)| *id != self.id);
            }
            TopicKey::ChangeRequests => {
                state.change_observers.retain(|(id, _)| *id != self.id);
            }
            TopicKey::Notifications(faculty_id) => {
                if let Some(observers) = state.notification_observers.get_mut(faculty_id) {
                    observers.retain(|(id, _)| *id != self.id);
                }
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
