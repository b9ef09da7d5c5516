// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::Decision;
use crate::types::{FacultyId, NotificationId};
use serde::{Deserialize, Serialize};

/// A message delivered to one faculty member when a request is decided.
///
/// Notification queues are partitioned by faculty id: entries for one
/// faculty member are invisible to and cannot be dismissed by any other.
/// A notification is removed only by explicit dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Store-assigned monotonic identifier.
    pub id: NotificationId,
    /// The faculty member this notification belongs to.
    pub faculty_id: FacultyId,
    /// Human-readable message text.
    pub message: String,
    /// The decision outcome that produced this notification.
    pub outcome: Decision,
}

impl Notification {
    /// Creates a new notification.
    #[must_use]
    pub const fn new(
        id: NotificationId,
        faculty_id: FacultyId,
        message: String,
        outcome: Decision,
    ) -> Self {
        Self {
            id,
            faculty_id,
            message,
            outcome,
        }
    }
}
