// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use slotboard_domain::{ChangeRequest, LeaveRequest, Notification, RequestStatus};

/// API request to submit a leave request.
///
/// The date arrives as an ISO 8601 string and is parsed at the boundary;
/// the summary text is derived, never supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLeaveRequestRequest {
    /// The requesting faculty member's id.
    pub faculty_id: String,
    /// The requesting faculty member's display name.
    pub faculty_name: String,
    /// The subjects affected, as display text.
    pub subject: String,
    /// The requested date (ISO 8601, e.g. "2024-08-01").
    pub date: String,
    /// The requested time window (free text, e.g. "All Day").
    pub time: String,
    /// Free-text purpose of the leave.
    pub purpose: String,
}

/// API response for a successful leave request submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitLeaveRequestResponse {
    /// The assigned request id.
    pub request_id: u64,
    /// The derived summary text.
    pub summary: String,
    /// A success message.
    pub message: String,
}

/// API request to submit a schedule-change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitChangeRequestRequest {
    /// The requesting faculty member's id.
    pub faculty_id: String,
    /// The requesting faculty member's display name.
    pub faculty_name: String,
    /// Free-text description of the desired change.
    pub description: String,
    /// Human-readable label of the slot to move away from.
    pub from_slot: String,
    /// Human-readable label of the desired slot.
    pub to_slot: String,
}

/// API response for a successful change request submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitChangeRequestResponse {
    /// The assigned request id.
    pub request_id: u64,
    /// A success message.
    pub message: String,
}

/// API response for a decided request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecideRequestResponse {
    /// The decided request id.
    pub request_id: u64,
    /// The status the request now holds.
    pub status: RequestStatus,
    /// A success message.
    pub message: String,
}

/// API response listing leave requests in submission order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListLeaveRequestsResponse {
    /// The full leave request collection.
    pub requests: Vec<LeaveRequest>,
}

/// API response listing change requests in submission order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListChangeRequestsResponse {
    /// The full change request collection.
    pub requests: Vec<ChangeRequest>,
}

/// API response listing one faculty member's notifications, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListNotificationsResponse {
    /// The notification queue for the requested faculty member.
    pub notifications: Vec<Notification>,
}

/// API response for a notification dismissal.
///
/// Dismissing an id that is not present succeeds; dismissal is a
/// no-op delete.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DismissNotificationResponse {
    /// A success message.
    pub message: String,
}

/// Model input for the timetable generation flow.
///
/// The prompt is fully assembled by the API layer; the model sees only
/// opaque text plus the number of drafts to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTimetableOptionsRequest {
    /// The assembled generation prompt.
    pub prompt: String,
    /// How many drafts to produce (validated to 1..=5).
    pub option_count: u8,
}

/// Model output for the timetable generation flow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateTimetableOptionsResponse {
    /// Generated drafts as free text, nominally JSON timetables.
    pub options: Vec<String>,
}

/// Model input for the suggestion flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestTimetableChangesRequest {
    /// The assembled suggestion prompt.
    pub prompt: String,
}

/// Model output for the suggestion flow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SuggestTimetableChangesResponse {
    /// The suggested revised timetable as free text, nominally JSON.
    pub suggested_changes: String,
    /// Why the changes were suggested.
    pub explanation: String,
}
