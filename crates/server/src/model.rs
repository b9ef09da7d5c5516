// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The built-in completion-service stand-in.
//!
//! Everything in this system is seeded in-memory data; the schedule model
//! is no exception. [`CannedScheduleModel`] answers every prompt with the
//! same draft covering the two seeded batches, which keeps the full
//! generate/render path exercisable without an external service.

use slotboard_api::model::{ModelError, ScheduleModel};
use slotboard_api::request_response::{
    GenerateTimetableOptionsRequest, GenerateTimetableOptionsResponse,
    SuggestTimetableChangesRequest, SuggestTimetableChangesResponse,
};

/// The canned draft for the seeded batches.
const CANNED_DRAFT: &str = r#"{
  "B001": {
    "Monday": ["09:00-10:00 - CS101 (F001) in C001", "11:00-12:00 - CS102 (F002) in C001"],
    "Tuesday": ["10:00-11:00 - CS101 (F001) in C001"],
    "Wednesday": [],
    "Thursday": [],
    "Friday": []
  },
  "B002": {
    "Monday": [],
    "Tuesday": [],
    "Wednesday": ["14:00-15:30 - AI202 (F001) in C002"],
    "Thursday": ["10:00-11:30 - DS301 (F002) in C002"],
    "Friday": []
  }
}"#;

/// A schedule model that always answers with the canned draft.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedScheduleModel;

impl CannedScheduleModel {
    /// Creates the canned model.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ScheduleModel for CannedScheduleModel {
    fn generate(
        &self,
        request: &GenerateTimetableOptionsRequest,
    ) -> Result<GenerateTimetableOptionsResponse, ModelError> {
        let options: Vec<String> = (0..request.option_count)
            .map(|_| String::from(CANNED_DRAFT))
            .collect();
        Ok(GenerateTimetableOptionsResponse { options })
    }

    fn suggest(
        &self,
        _request: &SuggestTimetableChangesRequest,
    ) -> Result<SuggestTimetableChangesResponse, ModelError> {
        Ok(SuggestTimetableChangesResponse {
            suggested_changes: String::from(CANNED_DRAFT),
            explanation: String::from(
                "The schedule already satisfies the stated constraints; no slots were moved.",
            ),
        })
    }
}
