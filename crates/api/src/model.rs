// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The external completion-service boundary.
//!
//! The dashboard never generates timetables itself; it hands an assembled
//! prompt to whatever implements [`ScheduleModel`] and treats the reply
//! as untrusted text. This crate only consumes the trait; the server
//! supplies the implementation.

use thiserror::Error;

use crate::request_response::{
    GenerateTimetableOptionsRequest, GenerateTimetableOptionsResponse,
    SuggestTimetableChangesRequest, SuggestTimetableChangesResponse,
};

/// Completion-service errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The service could not be reached or refused the call.
    #[error("Completion service unavailable: {reason}")]
    Unavailable { reason: String },

    /// The service answered with nothing usable.
    #[error("Completion service returned an empty response")]
    EmptyResponse,
}

/// An external text-completion service that drafts timetables.
///
/// Implementations receive fully assembled prompts and return free text.
/// Replies are never validated here; malformed drafts degrade at the
/// rendering layer instead of failing the call.
pub trait ScheduleModel: Send + Sync {
    /// Produces `option_count` timetable drafts.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    fn generate(
        &self,
        request: &GenerateTimetableOptionsRequest,
    ) -> Result<GenerateTimetableOptionsResponse, ModelError>;

    /// Produces one revised draft plus an explanation.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    fn suggest(
        &self,
        request: &SuggestTimetableChangesRequest,
    ) -> Result<SuggestTimetableChangesResponse, ModelError>;
}
