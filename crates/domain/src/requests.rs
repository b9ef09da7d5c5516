// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::RequestStatus;
use crate::types::{FacultyId, RequestId};
use serde::{Deserialize, Serialize};
use time::Date;

/// A faculty-submitted request for leave on a given date.
///
/// Leave requests are created `Pending` and mutated only by a single
/// administrator decision; they are never deleted, so the collection is a
/// full history of submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// The requesting faculty member.
    pub faculty_id: FacultyId,
    /// The requester's display name.
    pub faculty_name: String,
    /// The subject codes the requester teaches, as display text.
    pub subject: String,
    /// A derived one-line summary of the request.
    pub summary: String,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// The requested leave date.
    pub date: Date,
    /// The requested time window (free text, e.g. "All Day").
    pub time: String,
    /// The stated purpose of the leave.
    pub purpose: String,
}

impl LeaveRequest {
    /// Creates a new pending leave request with a derived summary line.
    #[must_use]
    pub fn new(
        id: RequestId,
        faculty_id: FacultyId,
        faculty_name: String,
        subject: String,
        date: Date,
        time: String,
        purpose: String,
    ) -> Self {
        let summary: String = format!("Leave request for {date} at {time}. Purpose: {purpose}");
        Self {
            id,
            faculty_id,
            faculty_name,
            subject,
            summary,
            status: RequestStatus::Pending,
            date,
            time,
            purpose,
        }
    }
}

/// A faculty-submitted request to move a scheduled class.
///
/// Same lifecycle as [`LeaveRequest`]: created `Pending`, decided once by
/// an administrator, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// The requesting faculty member.
    pub faculty_id: FacultyId,
    /// The requester's display name.
    pub faculty_name: String,
    /// Free-text description of the desired change.
    pub description: String,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// Human-readable label of the slot to move (e.g.
    /// "Monday 09:00-10:00 (CS101)").
    pub from_slot: String,
    /// Human-readable label of the desired slot.
    pub to_slot: String,
}

impl ChangeRequest {
    /// Creates a new pending change request.
    #[must_use]
    pub const fn new(
        id: RequestId,
        faculty_id: FacultyId,
        faculty_name: String,
        description: String,
        from_slot: String,
        to_slot: String,
    ) -> Self {
        Self {
            id,
            faculty_id,
            faculty_name,
            description,
            status: RequestStatus::Pending,
            from_slot,
            to_slot,
        }
    }
}

/// Returns the seeded leave requests present at startup.
///
/// # Errors
///
/// Returns an error if a seed identifier or date is malformed; the seed is
/// fixed, so this only fires if the seed itself is edited incorrectly.
pub fn seed_leave_requests() -> Result<Vec<LeaveRequest>, crate::DomainError> {
    Ok(vec![LeaveRequest {
        id: RequestId::new(2),
        faculty_id: FacultyId::new("F002")?,
        faculty_name: String::from("Dr. Ada Lovelace"),
        subject: String::from("CS102, DS301"),
        summary: String::from("Requesting Wednesday off."),
        status: RequestStatus::Pending,
        date: time::macros::date!(2024 - 07 - 31),
        time: String::from("All Day"),
        purpose: String::from("Conference"),
    }])
}

/// Returns the seeded change requests present at startup.
///
/// # Errors
///
/// Returns an error if a seed identifier is malformed.
pub fn seed_change_requests() -> Result<Vec<ChangeRequest>, crate::DomainError> {
    Ok(vec![ChangeRequest {
        id: RequestId::new(1),
        faculty_id: FacultyId::new("F001")?,
        faculty_name: String::from("Dr. Alan Turing"),
        description: String::from("Swap CS101 on Mon 9am with CS101 on Tue 10am."),
        status: RequestStatus::Pending,
        from_slot: String::from("Monday 09:00-10:00 (CS101)"),
        to_slot: String::from("Tuesday 10:00-11:00 (CS101)"),
    }])
}
