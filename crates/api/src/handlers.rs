// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard operations: the API surface over the shared store and the
//! completion-service flows.

use std::sync::atomic::{AtomicU64, Ordering};

use slotboard::{DashboardStore, UpdateOutcome};
use slotboard_domain::{
    Catalog, ChangeRequest, Decision, FacultyId, LeaveRequest, NotificationId, RequestId,
};
use time::Date;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error};
use crate::model::ScheduleModel;
use crate::prompt::{SuggestionContext, build_generation_prompt, build_suggestion_prompt};
use crate::request_response::{
    DecideRequestResponse, DismissNotificationResponse, GenerateTimetableOptionsRequest,
    GenerateTimetableOptionsResponse, ListChangeRequestsResponse, ListLeaveRequestsResponse,
    ListNotificationsResponse, SubmitChangeRequestRequest, SubmitChangeRequestResponse,
    SubmitLeaveRequestRequest, SubmitLeaveRequestResponse, SuggestTimetableChangesRequest,
    SuggestTimetableChangesResponse,
};

/// The default number of generated timetable drafts.
pub const DEFAULT_OPTION_COUNT: u8 = 3;

/// The permitted range of generated timetable drafts.
pub const OPTION_COUNT_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// The dashboard API surface: a store handle, the seeded catalog, and a
/// monotonic request id allocator.
///
/// Request ids continue past the highest seeded id so seeds and
/// submissions never collide.
pub struct Dashboard {
    store: DashboardStore,
    catalog: Catalog,
    next_request_id: AtomicU64,
}

impl Dashboard {
    /// Creates a dashboard over an existing store and catalog.
    #[must_use]
    pub fn new(store: DashboardStore, catalog: Catalog) -> Self {
        let highest = store
            .leave_requests()
            .iter()
            .map(|request| request.id.value())
            .chain(
                store
                    .change_requests()
                    .iter()
                    .map(|request| request.id.value()),
            )
            .max()
            .unwrap_or(0);
        Self {
            store,
            catalog,
            next_request_id: AtomicU64::new(highest + 1),
        }
    }

    /// Returns the underlying store handle.
    #[must_use]
    pub const fn store(&self) -> &DashboardStore {
        &self.store
    }

    /// Returns the seeded catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn allocate_request_id(&self) -> RequestId {
        RequestId::new(self.next_request_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Submits a leave request on behalf of a faculty member.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not submit for this faculty
    /// member, or if the faculty id or date is invalid.
    pub fn submit_leave_request(
        &self,
        actor: &AuthenticatedActor,
        request: SubmitLeaveRequestRequest,
    ) -> Result<SubmitLeaveRequestResponse, ApiError> {
        let faculty_id: FacultyId =
            FacultyId::new(&request.faculty_id).map_err(translate_domain_error)?;
        AuthorizationService::authorize_submit_request(actor, &faculty_id)?;

        let date: Date = parse_iso_date(&request.date)?;
        let id: RequestId = self.allocate_request_id();
        let record = LeaveRequest::new(
            id,
            faculty_id,
            request.faculty_name,
            request.subject,
            date,
            request.time,
            request.purpose,
        );
        let summary: String = record.summary.clone();
        tracing::info!(request_id = id.value(), "leave request submitted");
        self.store.add_leave_request(record);

        Ok(SubmitLeaveRequestResponse {
            request_id: id.value(),
            summary,
            message: String::from("Leave request submitted"),
        })
    }

    /// Submits a schedule-change request on behalf of a faculty member.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not submit for this faculty
    /// member, or if the faculty id is invalid.
    pub fn submit_change_request(
        &self,
        actor: &AuthenticatedActor,
        request: SubmitChangeRequestRequest,
    ) -> Result<SubmitChangeRequestResponse, ApiError> {
        let faculty_id: FacultyId =
            FacultyId::new(&request.faculty_id).map_err(translate_domain_error)?;
        AuthorizationService::authorize_submit_request(actor, &faculty_id)?;

        let id: RequestId = self.allocate_request_id();
        let record = ChangeRequest::new(
            id,
            faculty_id,
            request.faculty_name,
            request.description,
            request.from_slot,
            request.to_slot,
        );
        tracing::info!(request_id = id.value(), "change request submitted");
        self.store.add_change_request(record);

        Ok(SubmitChangeRequestResponse {
            request_id: id.value(),
            message: String::from("Change request submitted"),
        })
    }

    /// Applies an administrator decision to a leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin, the request does
    /// not exist, or the request is already decided.
    pub fn decide_leave_request(
        &self,
        actor: &AuthenticatedActor,
        request_id: u64,
        decision: Decision,
    ) -> Result<DecideRequestResponse, ApiError> {
        AuthorizationService::authorize_decide_request(actor)?;
        let outcome = self
            .store
            .decide_leave_request(RequestId::new(request_id), decision);
        Self::decision_response("Leave request", request_id, decision, outcome)
    }

    /// Applies an administrator decision to a change request.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin, the request does
    /// not exist, or the request is already decided.
    pub fn decide_change_request(
        &self,
        actor: &AuthenticatedActor,
        request_id: u64,
        decision: Decision,
    ) -> Result<DecideRequestResponse, ApiError> {
        AuthorizationService::authorize_decide_request(actor)?;
        let outcome = self
            .store
            .decide_change_request(RequestId::new(request_id), decision);
        Self::decision_response("Change request", request_id, decision, outcome)
    }

    fn decision_response(
        resource_type: &str,
        request_id: u64,
        decision: Decision,
        outcome: UpdateOutcome,
    ) -> Result<DecideRequestResponse, ApiError> {
        match outcome {
            UpdateOutcome::Applied => {
                tracing::info!(request_id, decision = decision.as_str(), "request decided");
                Ok(DecideRequestResponse {
                    request_id,
                    status: decision.status(),
                    message: format!("{resource_type} {}", decision.as_lower()),
                })
            }
            UpdateOutcome::NotFound => Err(ApiError::ResourceNotFound {
                resource_type: String::from(resource_type),
                message: format!("{resource_type} {request_id} does not exist"),
            }),
            UpdateOutcome::AlreadyDecided => Err(ApiError::RequestAlreadyDecided { request_id }),
        }
    }

    /// Lists all leave requests in submission order.
    #[must_use]
    pub fn list_leave_requests(&self) -> ListLeaveRequestsResponse {
        ListLeaveRequestsResponse {
            requests: self.store.leave_requests(),
        }
    }

    /// Lists all change requests in submission order.
    #[must_use]
    pub fn list_change_requests(&self) -> ListChangeRequestsResponse {
        ListChangeRequestsResponse {
            requests: self.store.change_requests(),
        }
    }

    /// Lists one faculty member's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not view this partition or the
    /// faculty id is invalid.
    pub fn list_notifications(
        &self,
        actor: &AuthenticatedActor,
        faculty_id: &str,
    ) -> Result<ListNotificationsResponse, ApiError> {
        let faculty_id: FacultyId = FacultyId::new(faculty_id).map_err(translate_domain_error)?;
        AuthorizationService::authorize_notification_access(actor, &faculty_id)?;
        Ok(ListNotificationsResponse {
            notifications: self.store.notifications_for(&faculty_id),
        })
    }

    /// Dismisses one notification from a faculty member's queue.
    ///
    /// Dismissing an id that is not in the queue succeeds without
    /// changing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not touch this partition or the
    /// faculty id is invalid.
    pub fn dismiss_notification(
        &self,
        actor: &AuthenticatedActor,
        faculty_id: &str,
        notification_id: u64,
    ) -> Result<DismissNotificationResponse, ApiError> {
        let faculty_id: FacultyId = FacultyId::new(faculty_id).map_err(translate_domain_error)?;
        AuthorizationService::authorize_notification_access(actor, &faculty_id)?;
        self.store
            .remove_notification(&faculty_id, NotificationId::new(notification_id));
        tracing::info!(notification_id, "notification dismissed");
        Ok(DismissNotificationResponse {
            message: String::from("Notification dismissed"),
        })
    }

    /// Runs the timetable generation flow.
    ///
    /// A missing option count defaults to [`DEFAULT_OPTION_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the option count is out of range or the
    /// completion service fails.
    pub fn generate_timetable_options(
        &self,
        model: &dyn ScheduleModel,
        option_count: Option<u8>,
    ) -> Result<GenerateTimetableOptionsResponse, ApiError> {
        let option_count: u8 = option_count.unwrap_or(DEFAULT_OPTION_COUNT);
        if !OPTION_COUNT_RANGE.contains(&option_count) {
            return Err(ApiError::InvalidInput {
                field: String::from("option_count"),
                message: format!(
                    "Option count {option_count} is out of range. Must be between {} and {}",
                    OPTION_COUNT_RANGE.start(),
                    OPTION_COUNT_RANGE.end()
                ),
            });
        }

        let request = GenerateTimetableOptionsRequest {
            prompt: build_generation_prompt(&self.catalog),
            option_count,
        };
        tracing::info!(option_count, "generating timetable drafts");
        model.generate(&request).map_err(|err| {
            tracing::error!(error = %err, "timetable generation failed");
            ApiError::ModelFailure {
                message: err.to_string(),
            }
        })
    }

    /// Runs the suggestion flow for one faculty member.
    ///
    /// # Errors
    ///
    /// Returns an error if the completion service fails.
    pub fn suggest_timetable_changes(
        &self,
        model: &dyn ScheduleModel,
        context: SuggestionContext,
    ) -> Result<SuggestTimetableChangesResponse, ApiError> {
        let request = SuggestTimetableChangesRequest {
            prompt: build_suggestion_prompt(&context),
        };
        tracing::info!(faculty_id = %context.faculty_id, "requesting timetable suggestions");
        model.suggest(&request).map_err(|err| {
            tracing::error!(error = %err, "timetable suggestion failed");
            ApiError::ModelFailure {
                message: err.to_string(),
            }
        })
    }
}

fn parse_iso_date(raw: &str) -> Result<Date, ApiError> {
    Date::parse(raw, &time::format_description::well_known::Iso8601::DEFAULT).map_err(|err| {
        ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{raw}': {err}"),
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::ModelError;
    use slotboard_domain::RequestStatus;

    struct CannedModel {
        generate_result: Result<GenerateTimetableOptionsResponse, ModelError>,
        suggest_result: Result<SuggestTimetableChangesResponse, ModelError>,
    }

    impl ScheduleModel for CannedModel {
        fn generate(
            &self,
            _request: &GenerateTimetableOptionsRequest,
        ) -> Result<GenerateTimetableOptionsResponse, ModelError> {
            self.generate_result.clone()
        }

        fn suggest(
            &self,
            _request: &SuggestTimetableChangesRequest,
        ) -> Result<SuggestTimetableChangesResponse, ModelError> {
            self.suggest_result.clone()
        }
    }

    fn working_model() -> CannedModel {
        CannedModel {
            generate_result: Ok(GenerateTimetableOptionsResponse {
                options: vec![String::from("{}")],
            }),
            suggest_result: Ok(SuggestTimetableChangesResponse {
                suggested_changes: String::from("{}"),
                explanation: String::from("No changes needed"),
            }),
        }
    }

    fn failing_model() -> CannedModel {
        CannedModel {
            generate_result: Err(ModelError::Unavailable {
                reason: String::from("connection refused"),
            }),
            suggest_result: Err(ModelError::EmptyResponse),
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(DashboardStore::new(), Catalog::seeded().unwrap())
    }

    fn seeded_dashboard() -> Dashboard {
        let store = DashboardStore::with_requests(
            slotboard_domain::seed_leave_requests().unwrap(),
            slotboard_domain::seed_change_requests().unwrap(),
        );
        Dashboard::new(store, Catalog::seeded().unwrap())
    }

    fn leave_submission(faculty_id: &str) -> SubmitLeaveRequestRequest {
        SubmitLeaveRequestRequest {
            faculty_id: String::from(faculty_id),
            faculty_name: String::from("Dr. Alan Turing"),
            subject: String::from("CS101"),
            date: String::from("2024-08-01"),
            time: String::from("All Day"),
            purpose: String::from("Conference"),
        }
    }

    #[test]
    fn test_submit_leave_request_derives_summary() {
        let dashboard = dashboard();
        let actor = AuthenticatedActor::admin();

        let response = dashboard
            .submit_leave_request(&actor, leave_submission("F001"))
            .unwrap();

        assert!(response.summary.contains("2024-08-01"));
        assert!(response.summary.contains("Conference"));
        assert_eq!(dashboard.list_leave_requests().requests.len(), 1);
    }

    #[test]
    fn test_submit_rejects_malformed_date() {
        let dashboard = dashboard();
        let actor = AuthenticatedActor::admin();
        let mut submission = leave_submission("F001");
        submission.date = String::from("not-a-date");

        let result = dashboard.submit_leave_request(&actor, submission);
        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
        assert!(dashboard.list_leave_requests().requests.is_empty());
    }

    #[test]
    fn test_request_ids_continue_past_seeds() {
        let dashboard = seeded_dashboard();
        let actor = AuthenticatedActor::admin();

        let response = dashboard
            .submit_leave_request(&actor, leave_submission("F001"))
            .unwrap();

        // Seeds occupy ids 1 and 2.
        assert_eq!(response.request_id, 3);
    }

    #[test]
    fn test_faculty_cannot_decide() {
        let dashboard = seeded_dashboard();
        let actor =
            AuthenticatedActor::faculty(slotboard_domain::FacultyId::new("F002").unwrap());

        let result = dashboard.decide_leave_request(&actor, 2, Decision::Approved);
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[test]
    fn test_decide_absent_request_is_not_found() {
        let dashboard = seeded_dashboard();
        let actor = AuthenticatedActor::admin();

        let result = dashboard.decide_leave_request(&actor, 999, Decision::Approved);
        assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    }

    #[test]
    fn test_second_decision_conflicts() {
        let dashboard = seeded_dashboard();
        let actor = AuthenticatedActor::admin();

        let response = dashboard
            .decide_leave_request(&actor, 2, Decision::Approved)
            .unwrap();
        assert_eq!(response.status, RequestStatus::Approved);

        let result = dashboard.decide_leave_request(&actor, 2, Decision::Rejected);
        assert_eq!(
            result,
            Err(ApiError::RequestAlreadyDecided { request_id: 2 })
        );
    }

    #[test]
    fn test_decision_posts_notification_to_requester() {
        let dashboard = seeded_dashboard();
        let admin = AuthenticatedActor::admin();

        dashboard
            .decide_change_request(&admin, 1, Decision::Rejected)
            .unwrap();

        let owner =
            AuthenticatedActor::faculty(slotboard_domain::FacultyId::new("F001").unwrap());
        let notifications = dashboard.list_notifications(&owner, "F001").unwrap();
        assert_eq!(notifications.notifications.len(), 1);
        assert!(
            notifications.notifications[0]
                .message
                .contains("has been rejected")
        );
    }

    #[test]
    fn test_faculty_cannot_read_other_partitions() {
        let dashboard = dashboard();
        let actor =
            AuthenticatedActor::faculty(slotboard_domain::FacultyId::new("F001").unwrap());

        let result = dashboard.list_notifications(&actor, "F002");
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[test]
    fn test_dismiss_absent_notification_succeeds() {
        let dashboard = dashboard();
        let actor = AuthenticatedActor::admin();

        assert!(dashboard.dismiss_notification(&actor, "F001", 42).is_ok());
    }

    #[test]
    fn test_option_count_defaults_and_bounds() {
        let dashboard = dashboard();
        let model = working_model();

        assert!(
            dashboard
                .generate_timetable_options(&model, None)
                .is_ok()
        );
        assert!(
            dashboard
                .generate_timetable_options(&model, Some(5))
                .is_ok()
        );
        for count in [0, 6] {
            let result = dashboard.generate_timetable_options(&model, Some(count));
            assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_model_failures_become_model_failure_errors() {
        let dashboard = dashboard();
        let model = failing_model();

        let generated = dashboard.generate_timetable_options(&model, None);
        assert!(matches!(generated, Err(ApiError::ModelFailure { .. })));

        let suggested = dashboard.suggest_timetable_changes(
            &model,
            SuggestionContext {
                timetable_data: String::from("{}"),
                faculty_preferences: String::new(),
                constraints: String::new(),
                faculty_id: String::from("F001"),
            },
        );
        assert!(matches!(suggested, Err(ApiError::ModelFailure { .. })));
    }
}
