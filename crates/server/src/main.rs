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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use slotboard::DashboardStore;
use slotboard_api::{
    ApiError, AuthenticatedActor, Dashboard, Role, ScheduleModel,
    prompt::SuggestionContext,
    request_response::{
        DecideRequestResponse, DismissNotificationResponse, ListChangeRequestsResponse,
        ListLeaveRequestsResponse, ListNotificationsResponse, SubmitChangeRequestRequest,
        SubmitChangeRequestResponse, SubmitLeaveRequestRequest, SubmitLeaveRequestResponse,
    },
};
use slotboard_domain::{
    Catalog, Classroom, Constraint, Decision, Faculty, FacultyId, StudentBatch, Subject,
    seed_change_requests, seed_leave_requests,
};
use slotboard_render::{ScheduleView, classify_text};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::model::CannedScheduleModel;

mod live;
mod model;

/// Slotboard Server - HTTP server for the academic timetable dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The API surface over the store and catalog.
    dashboard: Arc<Dashboard>,
    /// The completion-service implementation.
    model: Arc<dyn ScheduleModel>,
    /// Fan-out for the live event stream.
    broadcaster: LiveEventBroadcaster,
}

/// API request for submitting a leave request.
///
/// Role information travels in the payload; there is no real
/// authentication.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SubmitLeaveApiRequest {
    /// The role of the actor.
    actor_role: String,
    /// The acting faculty id, required for faculty actors.
    #[serde(skip_serializing_if = "Option::is_none")]
    actor_faculty_id: Option<String>,
    /// The requesting faculty member's id.
    faculty_id: String,
    /// The requesting faculty member's display name.
    faculty_name: String,
    /// The subjects affected, as display text.
    subject: String,
    /// The requested date (ISO 8601).
    date: String,
    /// The requested time window.
    time: String,
    /// Free-text purpose of the leave.
    purpose: String,
}

/// API request for submitting a schedule-change request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SubmitChangeApiRequest {
    /// The role of the actor.
    actor_role: String,
    /// The acting faculty id, required for faculty actors.
    #[serde(skip_serializing_if = "Option::is_none")]
    actor_faculty_id: Option<String>,
    /// The requesting faculty member's id.
    faculty_id: String,
    /// The requesting faculty member's display name.
    faculty_name: String,
    /// Free-text description of the desired change.
    description: String,
    /// Label of the slot to move away from.
    from_slot: String,
    /// Label of the desired slot.
    to_slot: String,
}

/// API request for deciding a leave or change request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DecideApiRequest {
    /// The role of the actor.
    actor_role: String,
    /// The acting faculty id, required for faculty actors.
    #[serde(skip_serializing_if = "Option::is_none")]
    actor_faculty_id: Option<String>,
    /// The verdict: "approved" or "rejected".
    decision: String,
}

/// Query parameters for notification endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct NotificationQuery {
    /// The role of the actor.
    actor_role: String,
    /// The acting faculty id, required for faculty actors.
    #[serde(skip_serializing_if = "Option::is_none")]
    actor_faculty_id: Option<String>,
    /// The partition to read or mutate.
    faculty_id: String,
}

/// API request for the generation flow.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct GenerateApiRequest {
    /// How many drafts to produce; defaults to 3 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    option_count: Option<u8>,
}

/// API response for a successful generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct GenerateApiResponse {
    /// Always true on this arm of the envelope.
    success: bool,
    /// Generated drafts as free text.
    options: Vec<String>,
}

/// API request for the suggestion flow.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SuggestApiRequest {
    /// The current timetable data, nominally JSON.
    timetable_data: String,
    /// The faculty member's free-text preferences.
    faculty_preferences: String,
    /// Constraints to respect, as free text.
    constraints: String,
    /// The id of the faculty member asking.
    faculty_id: String,
}

/// API response for a successful suggestion.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SuggestApiResponse {
    /// Always true on this arm of the envelope.
    success: bool,
    /// The suggested revised timetable as free text.
    suggested_changes: String,
    /// Why the changes were suggested.
    explanation: String,
}

/// The failure arm of the completion-flow envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ModelFailureResponse {
    /// Always false on this arm of the envelope.
    success: bool,
    /// A human-readable failure description.
    error: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RequestAlreadyDecided { .. } => StatusCode::CONFLICT,
            ApiError::ModelFailure { .. } => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Builds an acting identity from payload fields.
fn build_actor(role: &str, actor_faculty_id: Option<&str>) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = role.parse::<Role>().map_err(HttpError::from)?;
    match role {
        Role::Admin => Ok(AuthenticatedActor::admin()),
        Role::Faculty => {
            let raw: &str = actor_faculty_id.ok_or_else(|| HttpError {
                status: StatusCode::BAD_REQUEST,
                message: String::from("Faculty actors must supply actor_faculty_id"),
            })?;
            let faculty_id: FacultyId = FacultyId::new(raw).map_err(|e| HttpError {
                status: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            })?;
            Ok(AuthenticatedActor::faculty(faculty_id))
        }
    }
}

/// Parses a decision string into a `Decision`.
fn parse_decision(raw: &str) -> Result<Decision, HttpError> {
    if raw.eq_ignore_ascii_case("approved") {
        Ok(Decision::Approved)
    } else if raw.eq_ignore_ascii_case("rejected") {
        Ok(Decision::Rejected)
    } else {
        Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid decision: '{raw}'. Must be 'approved' or 'rejected'"),
        })
    }
}

/// Handler for GET `/catalog/faculty`.
async fn handle_list_faculty(AxumState(state): AxumState<AppState>) -> Json<Vec<Faculty>> {
    Json(state.dashboard.catalog().faculty.clone())
}

/// Handler for GET `/catalog/batches`.
async fn handle_list_batches(AxumState(state): AxumState<AppState>) -> Json<Vec<StudentBatch>> {
    Json(state.dashboard.catalog().student_batches.clone())
}

/// Handler for GET `/catalog/subjects`.
async fn handle_list_subjects(AxumState(state): AxumState<AppState>) -> Json<Vec<Subject>> {
    Json(state.dashboard.catalog().subjects.clone())
}

/// Handler for GET `/catalog/classrooms`.
async fn handle_list_classrooms(AxumState(state): AxumState<AppState>) -> Json<Vec<Classroom>> {
    Json(state.dashboard.catalog().classrooms.clone())
}

/// Handler for GET `/catalog/constraints`.
async fn handle_list_constraints(AxumState(state): AxumState<AppState>) -> Json<Vec<Constraint>> {
    Json(state.dashboard.catalog().constraints.clone())
}

/// Handler for GET `/requests/leave`.
async fn handle_list_leave_requests(
    AxumState(state): AxumState<AppState>,
) -> Json<ListLeaveRequestsResponse> {
    Json(state.dashboard.list_leave_requests())
}

/// Handler for GET `/requests/change`.
async fn handle_list_change_requests(
    AxumState(state): AxumState<AppState>,
) -> Json<ListChangeRequestsResponse> {
    Json(state.dashboard.list_change_requests())
}

/// Handler for POST `/requests/leave`.
async fn handle_submit_leave_request(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitLeaveApiRequest>,
) -> Result<Json<SubmitLeaveRequestResponse>, HttpError> {
    info!(faculty_id = %req.faculty_id, "Handling leave request submission");

    let actor: AuthenticatedActor = build_actor(&req.actor_role, req.actor_faculty_id.as_deref())?;
    let response: SubmitLeaveRequestResponse = state.dashboard.submit_leave_request(
        &actor,
        SubmitLeaveRequestRequest {
            faculty_id: req.faculty_id.clone(),
            faculty_name: req.faculty_name,
            subject: req.subject,
            date: req.date,
            time: req.time,
            purpose: req.purpose,
        },
    )?;

    state.broadcaster.broadcast(&LiveEvent::LeaveRequestSubmitted {
        request_id: response.request_id,
        faculty_id: req.faculty_id,
    });

    Ok(Json(response))
}

/// Handler for POST `/requests/change`.
async fn handle_submit_change_request(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitChangeApiRequest>,
) -> Result<Json<SubmitChangeRequestResponse>, HttpError> {
    info!(faculty_id = %req.faculty_id, "Handling change request submission");

    let actor: AuthenticatedActor = build_actor(&req.actor_role, req.actor_faculty_id.as_deref())?;
    let response: SubmitChangeRequestResponse = state.dashboard.submit_change_request(
        &actor,
        SubmitChangeRequestRequest {
            faculty_id: req.faculty_id.clone(),
            faculty_name: req.faculty_name,
            description: req.description,
            from_slot: req.from_slot,
            to_slot: req.to_slot,
        },
    )?;

    state
        .broadcaster
        .broadcast(&LiveEvent::ChangeRequestSubmitted {
            request_id: response.request_id,
            faculty_id: req.faculty_id,
        });

    Ok(Json(response))
}

/// Handler for POST `/requests/leave/{id}/decision`.
async fn handle_decide_leave_request(
    AxumState(state): AxumState<AppState>,
    Path(request_id): Path<u64>,
    Json(req): Json<DecideApiRequest>,
) -> Result<Json<DecideRequestResponse>, HttpError> {
    info!(request_id, decision = %req.decision, "Handling leave request decision");

    let actor: AuthenticatedActor = build_actor(&req.actor_role, req.actor_faculty_id.as_deref())?;
    let decision: Decision = parse_decision(&req.decision)?;
    let response: DecideRequestResponse =
        state
            .dashboard
            .decide_leave_request(&actor, request_id, decision)?;

    broadcast_decision(&state, "leave", request_id, &response);
    Ok(Json(response))
}

/// Handler for POST `/requests/change/{id}/decision`.
async fn handle_decide_change_request(
    AxumState(state): AxumState<AppState>,
    Path(request_id): Path<u64>,
    Json(req): Json<DecideApiRequest>,
) -> Result<Json<DecideRequestResponse>, HttpError> {
    info!(request_id, decision = %req.decision, "Handling change request decision");

    let actor: AuthenticatedActor = build_actor(&req.actor_role, req.actor_faculty_id.as_deref())?;
    let decision: Decision = parse_decision(&req.decision)?;
    let response: DecideRequestResponse =
        state
            .dashboard
            .decide_change_request(&actor, request_id, decision)?;

    broadcast_decision(&state, "change", request_id, &response);
    Ok(Json(response))
}

/// Broadcasts the events a successful decision produces: the decision
/// itself, then the notification posted to the requester's queue.
fn broadcast_decision(
    state: &AppState,
    kind: &str,
    request_id: u64,
    response: &DecideRequestResponse,
) {
    state.broadcaster.broadcast(&LiveEvent::RequestDecided {
        request_id,
        kind: String::from(kind),
        status: String::from(response.status.as_str()),
    });

    let requester: Option<String> = if kind == "leave" {
        state
            .dashboard
            .store()
            .leave_requests()
            .iter()
            .find(|request| request.id.value() == request_id)
            .map(|request| request.faculty_id.value().to_string())
    } else {
        state
            .dashboard
            .store()
            .change_requests()
            .iter()
            .find(|request| request.id.value() == request_id)
            .map(|request| request.faculty_id.value().to_string())
    };
    if let Some(faculty_id) = requester {
        state
            .broadcaster
            .broadcast(&LiveEvent::NotificationPosted { faculty_id });
    }
}

/// Handler for GET `/notifications`.
async fn handle_list_notifications(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<ListNotificationsResponse>, HttpError> {
    let actor: AuthenticatedActor =
        build_actor(&query.actor_role, query.actor_faculty_id.as_deref())?;
    let response: ListNotificationsResponse =
        state.dashboard.list_notifications(&actor, &query.faculty_id)?;
    Ok(Json(response))
}

/// Handler for DELETE `/notifications/{id}`.
async fn handle_dismiss_notification(
    AxumState(state): AxumState<AppState>,
    Path(notification_id): Path<u64>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<DismissNotificationResponse>, HttpError> {
    info!(notification_id, "Handling notification dismissal");

    let actor: AuthenticatedActor =
        build_actor(&query.actor_role, query.actor_faculty_id.as_deref())?;
    let response: DismissNotificationResponse =
        state
            .dashboard
            .dismiss_notification(&actor, &query.faculty_id, notification_id)?;
    Ok(Json(response))
}

/// Handler for POST `/timetables/generate`.
///
/// Completion-service failures are part of the contract, not HTTP
/// errors: they come back as the `{success: false, error}` envelope.
async fn handle_generate_timetables(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<GenerateApiRequest>,
) -> Result<Response, HttpError> {
    info!(option_count = ?req.option_count, "Handling timetable generation");

    match state
        .dashboard
        .generate_timetable_options(state.model.as_ref(), req.option_count)
    {
        Ok(response) => Ok(Json(GenerateApiResponse {
            success: true,
            options: response.options,
        })
        .into_response()),
        Err(ApiError::ModelFailure { message }) => Ok(Json(ModelFailureResponse {
            success: false,
            error: message,
        })
        .into_response()),
        Err(err) => Err(HttpError::from(err)),
    }
}

/// Handler for POST `/timetables/suggest`.
async fn handle_suggest_timetables(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SuggestApiRequest>,
) -> Result<Response, HttpError> {
    info!(faculty_id = %req.faculty_id, "Handling timetable suggestion");

    let context = SuggestionContext {
        timetable_data: req.timetable_data,
        faculty_preferences: req.faculty_preferences,
        constraints: req.constraints,
        faculty_id: req.faculty_id,
    };
    match state
        .dashboard
        .suggest_timetable_changes(state.model.as_ref(), context)
    {
        Ok(response) => Ok(Json(SuggestApiResponse {
            success: true,
            suggested_changes: response.suggested_changes,
            explanation: response.explanation,
        })
        .into_response()),
        Err(ApiError::ModelFailure { message }) => Ok(Json(ModelFailureResponse {
            success: false,
            error: message,
        })
        .into_response()),
        Err(err) => Err(HttpError::from(err)),
    }
}

/// Handler for POST `/timetables/preview`.
///
/// The body is untrusted draft text; the reply is the classified view.
/// This endpoint never fails on malformed input.
async fn handle_preview_timetable(body: String) -> Json<ScheduleView> {
    Json(classify_text(&body))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/catalog/faculty", get(handle_list_faculty))
        .route("/catalog/batches", get(handle_list_batches))
        .route("/catalog/subjects", get(handle_list_subjects))
        .route("/catalog/classrooms", get(handle_list_classrooms))
        .route("/catalog/constraints", get(handle_list_constraints))
        .route(
            "/requests/leave",
            get(handle_list_leave_requests).post(handle_submit_leave_request),
        )
        .route(
            "/requests/change",
            get(handle_list_change_requests).post(handle_submit_change_request),
        )
        .route(
            "/requests/leave/{id}/decision",
            post(handle_decide_leave_request),
        )
        .route(
            "/requests/change/{id}/decision",
            post(handle_decide_change_request),
        )
        .route("/notifications", get(handle_list_notifications))
        .route("/notifications/{id}", delete(handle_dismiss_notification))
        .route("/timetables/generate", post(handle_generate_timetables))
        .route("/timetables/suggest", post(handle_suggest_timetables))
        .route("/timetables/preview", post(handle_preview_timetable))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Slotboard Server");

    let store: DashboardStore =
        DashboardStore::with_requests(seed_leave_requests()?, seed_change_requests()?);
    let catalog: Catalog = Catalog::seeded()?;
    let app_state: AppState = AppState {
        dashboard: Arc::new(Dashboard::new(store, catalog)),
        model: Arc::new(CannedScheduleModel::new()),
        broadcaster: LiveEventBroadcaster::new(),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use slotboard_api::model::ModelError;
    use slotboard_api::request_response::{
        GenerateTimetableOptionsRequest, GenerateTimetableOptionsResponse,
        SuggestTimetableChangesRequest, SuggestTimetableChangesResponse,
    };
    use tower::ServiceExt;

    /// A model that fails every call, for exercising the error envelope.
    struct UnreachableModel;

    impl ScheduleModel for UnreachableModel {
        fn generate(
            &self,
            _request: &GenerateTimetableOptionsRequest,
        ) -> Result<GenerateTimetableOptionsResponse, ModelError> {
            Err(ModelError::Unavailable {
                reason: String::from("connection refused"),
            })
        }

        fn suggest(
            &self,
            _request: &SuggestTimetableChangesRequest,
        ) -> Result<SuggestTimetableChangesResponse, ModelError> {
            Err(ModelError::Unavailable {
                reason: String::from("connection refused"),
            })
        }
    }

    fn seeded_state_with_model(model: Arc<dyn ScheduleModel>) -> AppState {
        let store: DashboardStore = DashboardStore::with_requests(
            seed_leave_requests().expect("leave seed"),
            seed_change_requests().expect("change seed"),
        );
        let catalog: Catalog = Catalog::seeded().expect("catalog seed");
        AppState {
            dashboard: Arc::new(Dashboard::new(store, catalog)),
            model,
            broadcaster: LiveEventBroadcaster::new(),
        }
    }

    fn create_test_app_state() -> AppState {
        seeded_state_with_model(Arc::new(CannedScheduleModel::new()))
    }

    async fn send_json<T: Serialize>(
        app: Router,
        method: &str,
        uri: &str,
        body: &T,
    ) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn leave_submission(actor_role: &str, actor_faculty_id: Option<&str>) -> SubmitLeaveApiRequest {
        SubmitLeaveApiRequest {
            actor_role: actor_role.to_string(),
            actor_faculty_id: actor_faculty_id.map(str::to_string),
            faculty_id: String::from("F001"),
            faculty_name: String::from("Dr. Alan Turing"),
            subject: String::from("CS101"),
            date: String::from("2024-08-01"),
            time: String::from("All Day"),
            purpose: String::from("Conference"),
        }
    }

    fn decision(actor_role: &str, decision: &str) -> DecideApiRequest {
        DecideApiRequest {
            actor_role: actor_role.to_string(),
            actor_faculty_id: None,
            decision: decision.to_string(),
        }
    }

    #[tokio::test]
    async fn test_catalog_faculty_lists_seed_records() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/catalog/faculty")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["name"], "Dr. Alan Turing");
    }

    #[tokio::test]
    async fn test_faculty_submits_own_leave_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = send_json(
            app.clone(),
            "POST",
            "/requests/leave",
            &leave_submission("faculty", Some("F001")),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        assert!(body["summary"].as_str().unwrap().contains("2024-08-01"));

        // The seed occupies one slot; the submission appends a second.
        assert_eq!(app_state.dashboard.list_leave_requests().requests.len(), 2);
    }

    #[tokio::test]
    async fn test_faculty_cannot_submit_for_another() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            app,
            "POST",
            "/requests/leave",
            &leave_submission("faculty", Some("F002")),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_role_is_rejected() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            app,
            "POST",
            "/requests/leave",
            &leave_submission("student", None),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_faculty_cannot_decide() {
        let app: Router = build_router(create_test_app_state());

        let mut req = decision("faculty", "approved");
        req.actor_faculty_id = Some(String::from("F002"));
        let response = send_json(app, "POST", "/requests/leave/2/decision", &req).await;

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_decide_absent_request_is_404() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            app,
            "POST",
            "/requests/leave/999/decision",
            &decision("admin", "approved"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_second_decision_is_409() {
        let app: Router = build_router(create_test_app_state());

        let first = send_json(
            app.clone(),
            "POST",
            "/requests/leave/2/decision",
            &decision("admin", "approved"),
        )
        .await;
        assert_eq!(first.status(), HttpStatusCode::OK);
        let body = read_json(first).await;
        assert_eq!(body["status"], "Approved");

        let second = send_json(
            app,
            "POST",
            "/requests/leave/2/decision",
            &decision("admin", "rejected"),
        )
        .await;
        assert_eq!(second.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_decision_notification_is_listed_then_dismissed() {
        let app: Router = build_router(create_test_app_state());

        // The seeded leave request (id 2) belongs to F002.
        send_json(
            app.clone(),
            "POST",
            "/requests/leave/2/decision",
            &decision("admin", "approved"),
        )
        .await;

        let list_uri =
            "/notifications?actor_role=faculty&actor_faculty_id=F002&faculty_id=F002";
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(list_uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        let notifications = body["notifications"].as_array().unwrap();
        assert_eq!(notifications.len(), 1);
        let message = notifications[0]["message"].as_str().unwrap();
        assert!(message.contains("2024-07-31"));
        assert!(message.contains("has been approved"));

        let id = notifications[0]["id"].as_u64().unwrap();
        let dismiss_uri = format!(
            "/notifications/{id}?actor_role=faculty&actor_faculty_id=F002&faculty_id=F002"
        );
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&dismiss_uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(list_uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = read_json(response).await;
        assert!(body["notifications"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_faculty_cannot_read_other_partitions() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/notifications?actor_role=faculty&actor_faculty_id=F001&faculty_id=F002")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_generate_returns_success_envelope() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            app,
            "POST",
            "/timetables/generate",
            &GenerateApiRequest { option_count: None },
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["options"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_generate_rejects_out_of_range_count() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            app,
            "POST",
            "/timetables/generate",
            &GenerateApiRequest {
                option_count: Some(6),
            },
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_model_failure_becomes_error_envelope() {
        let app_state: AppState = seeded_state_with_model(Arc::new(UnreachableModel));
        let app: Router = build_router(app_state);

        let response = send_json(
            app.clone(),
            "POST",
            "/timetables/generate",
            &GenerateApiRequest { option_count: None },
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], false);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("connection refused")
        );

        let response = send_json(
            app,
            "POST",
            "/timetables/suggest",
            &SuggestApiRequest {
                timetable_data: String::from("{}"),
                faculty_preferences: String::from("No classes before 10am"),
                constraints: String::from("Lunch break 12pm-1pm"),
                faculty_id: String::from("F001"),
            },
        )
        .await;
        let body = read_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_suggest_returns_draft_and_explanation() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            app,
            "POST",
            "/timetables/suggest",
            &SuggestApiRequest {
                timetable_data: String::from("{}"),
                faculty_preferences: String::from("Prefer mornings"),
                constraints: String::from("None"),
                faculty_id: String::from("F001"),
            },
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["suggested_changes"].as_str().unwrap().contains("B001"));
        assert!(!body["explanation"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_degrades_plain_text_to_raw() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/timetables/preview")
                    .body(Body::from("not json at all"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["kind"], "raw_text");
        assert_eq!(body["value"], "not json at all");
    }

    #[tokio::test]
    async fn test_preview_renders_batch_shaped_drafts() {
        let app: Router = build_router(create_test_app_state());

        let draft = r#"{"B001": {"Monday": ["09:00-10:00 - CS101"]}}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/timetables/preview")
                    .body(Body::from(draft))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = read_json(response).await;
        assert_eq!(body["kind"], "batch_table");
        let rows = body["value"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["batch"], "B001");
        assert_eq!(rows[0]["week"]["Monday"][0], "09:00-10:00 - CS101");
        assert!(rows[0]["week"]["Friday"].as_array().unwrap().is_empty());
    }
}
