// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a faculty member (e.g. "F001").
///
/// Faculty ids partition notification queues: entries owned by one faculty
/// id are invisible to every other faculty id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacultyId {
    value: String,
}

impl FacultyId {
    /// Creates a new `FacultyId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFacultyId` if the value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidFacultyId(String::from(
                "id cannot be empty",
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the faculty id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for FacultyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a student batch (e.g. "B001").
///
/// Batch ids follow a fixed naming convention: they start with `B`. The
/// tolerant renderer uses this convention to decide whether an arbitrary
/// parsed object is batch-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId {
    value: String,
}

impl BatchId {
    /// Creates a new `BatchId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBatchId` if the value does not follow
    /// the batch naming convention.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::matches_key(value) {
            return Err(DomainError::InvalidBatchId(value.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Checks whether a raw key follows the batch naming convention.
    #[must_use]
    pub fn matches_key(key: &str) -> bool {
        key.starts_with('B')
    }

    /// Returns the batch id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a leave or change request.
///
/// Request ids are assigned monotonically by the submission boundary and
/// are unique across a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Creates a new `RequestId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a notification within a faculty member's queue.
///
/// Notification ids are assigned monotonically by the store, never from
/// wall-clock time, so two notifications created in the same instant still
/// get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new `NotificationId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five scheduled weekdays, in fixed rendering order.
///
/// Timetables cover Monday through Friday only; a draft never schedules
/// weekend slots and a rendered table always shows all five days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All scheduled weekdays in rendering order.
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Returns the display name of the weekday.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            _ => Err(DomainError::InvalidWeekday(s.to_string())),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_id_rejects_empty() {
        assert!(FacultyId::new("").is_err());
        assert!(FacultyId::new("   ").is_err());
        assert!(FacultyId::new("F001").is_ok());
    }

    #[test]
    fn test_batch_id_convention() {
        assert!(BatchId::new("B001").is_ok());
        assert!(BatchId::new("X001").is_err());
        assert!(BatchId::matches_key("B002"));
        assert!(!BatchId::matches_key("batch-2"));
    }

    #[test]
    fn test_weekday_order_is_monday_through_friday() {
        let names: Vec<&str> = Weekday::ALL.iter().map(Weekday::as_str).collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        );
    }

    #[test]
    fn test_weekday_round_trip() {
        for day in Weekday::ALL {
            match Weekday::from_str(day.as_str()) {
                Ok(parsed) => assert_eq!(day, parsed),
                Err(e) => panic!("Failed to parse weekday {day}: {e}"),
            }
        }
        assert!(Weekday::from_str("Saturday").is_err());
    }
}
