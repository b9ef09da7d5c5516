// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod notification;
mod requests;
mod status;
mod timetable;
mod types;

pub use catalog::{
    BatchLevel, Catalog, Classroom, Constraint, ConstraintValue, Faculty, RoomKind, StudentBatch,
    Subject, SubjectKind, seed_classrooms, seed_constraints, seed_faculty, seed_student_batches,
    seed_subjects,
};
pub use error::DomainError;
pub use notification::Notification;
pub use requests::{ChangeRequest, LeaveRequest, seed_change_requests, seed_leave_requests};
pub use status::{Decision, RequestStatus};
pub use timetable::{BatchSchedule, TimetableDraft, WeekSchedule};
pub use types::{BatchId, FacultyId, NotificationId, RequestId, Weekday};
