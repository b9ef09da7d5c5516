// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Faculty identifier is empty or invalid.
    InvalidFacultyId(String),
    /// Batch identifier does not follow the batch naming convention.
    InvalidBatchId(String),
    /// Request status string is not a valid status.
    InvalidRequestStatus {
        /// The invalid status string.
        status: String,
    },
    /// A status transition is not permitted by the request lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// Weekday string is not one of the five scheduled weekdays.
    InvalidWeekday(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFacultyId(msg) => write!(f, "Invalid faculty id: {msg}"),
            Self::InvalidBatchId(msg) => {
                write!(f, "Invalid batch id: '{msg}'. Batch ids start with 'B'")
            }
            Self::InvalidRequestStatus { status } => {
                write!(f, "Invalid request status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition request from {from} to {to}: {reason}")
            }
            Self::InvalidWeekday(msg) => {
                write!(f, "Invalid weekday: '{msg}'. Must be Monday through Friday")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
