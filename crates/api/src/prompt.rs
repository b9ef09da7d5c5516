// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Prompt assembly for the completion-service flows.
//!
//! Catalog records are embedded as pretty-printed JSON blocks so the
//! service sees the same structured text an operator would paste in.

use serde::Serialize;
use slotboard_domain::Catalog;

/// Inputs to the suggestion prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionContext {
    /// The current timetable data, nominally JSON.
    pub timetable_data: String,
    /// The faculty member's free-text preferences.
    pub faculty_preferences: String,
    /// Constraints to respect, as free text.
    pub constraints: String,
    /// The id of the faculty member asking.
    pub faculty_id: String,
}

/// Builds the generation prompt from the catalog.
///
/// The prompt states the expected output shape (a JSON object keyed by
/// batch id, then weekday, holding slot-label arrays) and then lists the
/// catalog blocks.
#[must_use]
pub fn build_generation_prompt(catalog: &Catalog) -> String {
    format!(
        "Generate a timetable in JSON format based on the following data.\n\
         The output should be a JSON object where keys are batch IDs. The value for each \
         batch ID is another dictionary where keys are days of the week (Monday-Friday) and \
         values are arrays of strings representing time slots \
         (e.g., \"09:00-10:00 - CS101 (F001) in C001\").\n\
         \n\
         Faculty: {}\n\
         Student Batches: {}\n\
         Subjects: {}\n\
         Classrooms: {}\n\
         Constraints: {}\n",
        block(&catalog.faculty),
        block(&catalog.student_batches),
        block(&catalog.subjects),
        block(&catalog.classrooms),
        block(&catalog.constraints),
    )
}

/// Builds the suggestion prompt from the current timetable and the
/// faculty member's preferences.
#[must_use]
pub fn build_suggestion_prompt(context: &SuggestionContext) -> String {
    format!(
        "You are an assistant helping faculty members suggest changes to the generated \
         timetable.\n\
         \n\
         Consider the current timetable data, faculty preferences, and constraints to \
         suggest the most optimal changes. The suggested changes should be a valid JSON \
         string representing the new timetable.\n\
         \n\
         Current Timetable Data: {}\n\
         Faculty Preferences: {}\n\
         Constraints: {}\n\
         Faculty ID: {}\n",
        context.timetable_data,
        context.faculty_preferences,
        context.constraints,
        context.faculty_id,
    )
}

fn block<T: Serialize>(records: &[T]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| String::from("[]"))
}
