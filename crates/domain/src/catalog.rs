// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog records: the academic inventory the dashboard operates on.
//!
//! The catalog is seeded in-memory data. There is no persistence layer;
//! a fresh process always starts from the same records.

use crate::error::DomainError;
use crate::types::{BatchId, FacultyId};
use serde::{Deserialize, Serialize};

/// A faculty member and their teaching profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Faculty identifier.
    pub id: FacultyId,
    /// Display name.
    pub name: String,
    /// Subject codes this faculty member teaches.
    pub subjects: Vec<String>,
    /// Availability as free text (e.g. "Mon-Fri 9am-5pm").
    pub availability: String,
    /// Weekly teaching workload in hours.
    pub workload: u32,
    /// Home department.
    pub department: String,
}

/// Undergraduate or postgraduate cohort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchLevel {
    /// Undergraduate.
    UG,
    /// Postgraduate.
    PG,
}

/// A cohort of students sharing one timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentBatch {
    /// Batch identifier.
    pub id: BatchId,
    /// Display name (e.g. "UG CS Sem 4").
    pub name: String,
    /// Cohort level.
    pub level: BatchLevel,
    /// Current semester number.
    pub semester: u8,
    /// Home department.
    pub department: String,
}

/// Core or elective subject classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    /// Mandatory for the batch.
    Core,
    /// Optional enrollment.
    Elective,
}

/// A taught subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Course code (e.g. "CS101").
    pub code: String,
    /// Credit weight.
    pub credits: u8,
    /// Scheduled contact hours per week.
    pub hours_per_week: u8,
    /// Core or elective.
    pub kind: SubjectKind,
}

/// Kind of teaching room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// Large lecture hall.
    #[serde(rename = "Lecture Hall")]
    LectureHall,
    /// Laboratory.
    Lab,
    /// Standard classroom.
    Classroom,
}

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Kind of room.
    pub kind: RoomKind,
    /// Whether the room is currently usable for scheduling.
    pub is_available: bool,
}

/// A scheduling constraint value: either free text or a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintValue {
    /// Numeric limit (e.g. max classes per day).
    Count(u32),
    /// Free-text rule (e.g. "Fri > 1pm").
    Text(String),
}

/// A scheduling constraint handed to the generation flow as prompt text.
///
/// Constraints are never enforced by this system; they are forwarded to
/// the external completion service verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint identifier.
    pub id: String,
    /// Human-readable rule description.
    pub description: String,
    /// The rule value.
    pub value: ConstraintValue,
}

/// The full academic inventory for one running instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Faculty records.
    pub faculty: Vec<Faculty>,
    /// Student batch records.
    pub student_batches: Vec<StudentBatch>,
    /// Subject records.
    pub subjects: Vec<Subject>,
    /// Classroom records.
    pub classrooms: Vec<Classroom>,
    /// Scheduling constraints.
    pub constraints: Vec<Constraint>,
}

impl Catalog {
    /// Builds the catalog from the seed records.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed identifier is malformed; the seed data
    /// is fixed, so this only fires if the seed itself is edited
    /// incorrectly.
    pub fn seeded() -> Result<Self, DomainError> {
        Ok(Self {
            faculty: seed_faculty()?,
            student_batches: seed_student_batches()?,
            subjects: seed_subjects(),
            classrooms: seed_classrooms(),
            constraints: seed_constraints(),
        })
    }

    /// Looks up a faculty record by id.
    #[must_use]
    pub fn faculty_by_id(&self, id: &FacultyId) -> Option<&Faculty> {
        self.faculty.iter().find(|member| member.id == *id)
    }
}

fn faculty_id(value: &str) -> Result<FacultyId, DomainError> {
    FacultyId::new(value)
}

fn batch_id(value: &str) -> Result<BatchId, DomainError> {
    BatchId::new(value)
}

/// Returns the seeded faculty records.
///
/// # Errors
///
/// Returns an error if a seed identifier is malformed; the seed data is
/// fixed, so this only fires if the seed itself is edited incorrectly.
pub fn seed_faculty() -> Result<Vec<Faculty>, DomainError> {
    Ok(vec![
        Faculty {
            id: faculty_id("F001")?,
            name: String::from("Dr. Alan Turing"),
            subjects: vec![String::from("CS101"), String::from("AI202")],
            availability: String::from("Mon-Fri 9am-5pm"),
            workload: 12,
            department: String::from("Computer Science"),
        },
        Faculty {
            id: faculty_id("F002")?,
            name: String::from("Dr. Ada Lovelace"),
            subjects: vec![String::from("CS102"), String::from("DS301")],
            availability: String::from("Mon, Wed, Fri 10am-4pm"),
            workload: 10,
            department: String::from("Data Science"),
        },
    ])
}

/// Returns the seeded student batches.
///
/// # Errors
///
/// Returns an error if a seed identifier is malformed.
pub fn seed_student_batches() -> Result<Vec<StudentBatch>, DomainError> {
    Ok(vec![
        StudentBatch {
            id: batch_id("B001")?,
            name: String::from("UG CS Sem 4"),
            level: BatchLevel::UG,
            semester: 4,
            department: String::from("Computer Science"),
        },
        StudentBatch {
            id: batch_id("B002")?,
            name: String::from("PG AI Sem 2"),
            level: BatchLevel::PG,
            semester: 2,
            department: String::from("Artificial Intelligence"),
        },
    ])
}

/// Returns the seeded subjects.
#[must_use]
pub fn seed_subjects() -> Vec<Subject> {
    vec![
        Subject {
            id: String::from("S001"),
            name: String::from("Introduction to CS"),
            code: String::from("CS101"),
            credits: 4,
            hours_per_week: 4,
            kind: SubjectKind::Core,
        },
        Subject {
            id: String::from("S002"),
            name: String::from("Advanced AI"),
            code: String::from("AI202"),
            credits: 3,
            hours_per_week: 3,
            kind: SubjectKind::Elective,
        },
        Subject {
            id: String::from("S003"),
            name: String::from("Data Structures"),
            code: String::from("CS102"),
            credits: 4,
            hours_per_week: 4,
            kind: SubjectKind::Core,
        },
        Subject {
            id: String::from("S004"),
            name: String::from("Machine Learning"),
            code: String::from("DS301"),
            credits: 3,
            hours_per_week: 3,
            kind: SubjectKind::Core,
        },
    ]
}

/// Returns the seeded classrooms.
#[must_use]
pub fn seed_classrooms() -> Vec<Classroom> {
    vec![
        Classroom {
            id: String::from("C001"),
            name: String::from("Room 101"),
            capacity: 60,
            kind: RoomKind::Classroom,
            is_available: true,
        },
        Classroom {
            id: String::from("C002"),
            name: String::from("AI Lab"),
            capacity: 40,
            kind: RoomKind::Lab,
            is_available: true,
        },
    ]
}

/// Returns the seeded scheduling constraints.
#[must_use]
pub fn seed_constraints() -> Vec<Constraint> {
    vec![
        Constraint {
            id: String::from("CN001"),
            description: String::from("Max classes per day per faculty"),
            value: ConstraintValue::Count(4),
        },
        Constraint {
            id: String::from("CN002"),
            description: String::from("No classes on Friday afternoon"),
            value: ConstraintValue::Text(String::from("Fri > 1pm")),
        },
        Constraint {
            id: String::from("CN003"),
            description: String::from("Lunch break"),
            value: ConstraintValue::Text(String::from("12pm-1pm daily")),
        },
        Constraint {
            id: String::from("CN004"),
            description: String::from("Average leave per month per faculty"),
            value: ConstraintValue::Count(3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_identifiers_are_well_formed() {
        match seed_faculty() {
            Ok(faculty) => assert_eq!(faculty.len(), 2),
            Err(e) => panic!("faculty seed invalid: {e}"),
        }
        match seed_student_batches() {
            Ok(batches) => {
                assert!(batches.iter().all(|b| BatchId::matches_key(b.id.value())));
            }
            Err(e) => panic!("batch seed invalid: {e}"),
        }
        assert_eq!(seed_subjects().len(), 4);
        assert_eq!(seed_classrooms().len(), 2);
        assert_eq!(seed_constraints().len(), 4);
    }

    #[test]
    fn test_catalog_lookup_by_faculty_id() {
        let catalog = match Catalog::seeded() {
            Ok(catalog) => catalog,
            Err(e) => panic!("catalog seed invalid: {e}"),
        };
        let id = match FacultyId::new("F002") {
            Ok(id) => id,
            Err(e) => panic!("invalid faculty id in test: {e}"),
        };
        match catalog.faculty_by_id(&id) {
            Some(member) => assert_eq!(member.name, "Dr. Ada Lovelace"),
            None => panic!("F002 missing from seeded catalog"),
        }
    }

    #[test]
    fn test_room_kind_display_names() {
        let json = match serde_json::to_string(&RoomKind::LectureHall) {
            Ok(json) => json,
            Err(e) => panic!("failed to serialize room kind: {e}"),
        };
        assert_eq!(json, "\"Lecture Hall\"");
    }
}
