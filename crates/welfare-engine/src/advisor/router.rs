use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::roster::RosterImporter;

use super::domain::{ApplicationId, Profile, UserId};
use super::repository::{
    ApplicationStatus, ApplicationStore, NotificationPublisher, ProfileRepository, RepositoryError,
};
use super::service::{AdvisorService, AdvisorServiceError};
use super::validation::{self, ProfileDraft};

/// Request payload for tracking a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub user_id: UserId,
    pub scheme_id: String,
    /// Defaults to today when the client does not date the application.
    #[serde(default)]
    pub applied_on: Option<NaiveDate>,
}

/// Request payload for moving an application through its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

/// Request payload for the stateless scoring endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub profile: Profile,
    #[serde(default)]
    pub completed_applications: u32,
}

/// Request payload carrying a raw roster CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterImportRequest {
    pub csv: String,
}

/// Router builder exposing HTTP endpoints for advisory and tracking.
pub fn advisor_router<P, A, N>(service: Arc<AdvisorService<P, A, N>>) -> Router
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/advisor/profiles/:user_id",
            post(save_profile_handler::<P, A, N>),
        )
        .route(
            "/api/v1/advisor/profiles/:user_id/report",
            get(report_handler::<P, A, N>),
        )
        .route(
            "/api/v1/advisor/profiles/:user_id/scenario",
            post(scenario_handler::<P, A, N>),
        )
        .route(
            "/api/v1/advisor/applications",
            post(apply_handler::<P, A, N>),
        )
        .route(
            "/api/v1/advisor/applications/:application_id/status",
            post(application_status_handler::<P, A, N>),
        )
        .route("/api/v1/advisor/cohort", get(cohort_handler::<P, A, N>))
        .route("/api/v1/advisor/score", post(score_handler::<P, A, N>))
        .route("/api/v1/advisor/validate", post(validate_handler))
        .route("/api/v1/advisor/roster", post(roster_handler::<P, A, N>))
        .with_state(service)
}

pub(crate) async fn save_profile_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    Path(user_id): Path<String>,
    axum::Json(profile): axum::Json<Profile>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    match service.save_profile(UserId(user_id), profile) {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    let id = UserId(user_id);
    match service.advise(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "profile not found",
                "user_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn scenario_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    Path(user_id): Path<String>,
    axum::Json(adjustments): axum::Json<super::scenario::ScenarioAdjustments>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    let id = UserId(user_id);
    match service.simulate(&id, &adjustments) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "profile not found",
                "user_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn apply_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    axum::Json(request): axum::Json<ApplicationRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    let applied_on = request
        .applied_on
        .unwrap_or_else(|| Local::now().date_naive());

    match service.apply(&request.user_id, &request.scheme_id, applied_on) {
        Ok(application) => (StatusCode::ACCEPTED, axum::Json(application)).into_response(),
        Err(AdvisorServiceError::UnknownScheme(scheme_id)) => {
            let payload = json!({
                "error": format!("unknown scheme: {scheme_id}"),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "profile not found",
                "user_id": request.user_id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(AdvisorServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn application_status_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    let id = ApplicationId(application_id);
    match service.set_application_status(&id, request.status) {
        Ok(application) => (StatusCode::OK, axum::Json(application)).into_response(),
        Err(AdvisorServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn cohort_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    match service.cohort() {
        Ok(report) => {
            let summary = report.summary();
            let insights = summary.insights();
            let payload = json!({
                "summary": summary,
                "insights": insights,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn score_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    let report = service.advise_profile(&request.profile, request.completed_applications);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn validate_handler(axum::Json(draft): axum::Json<ProfileDraft>) -> Response {
    let warnings = validation::validate_profile(&draft);
    let payload = json!({
        "warnings": warnings,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn roster_handler<P, A, N>(
    State(service): State<Arc<AdvisorService<P, A, N>>>,
    axum::Json(request): axum::Json<RosterImportRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    let import = match RosterImporter::from_reader(request.csv.as_bytes()) {
        Ok(import) => import,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let mut imported = 0usize;
    for (user_id, profile) in import.profiles {
        match service.save_profile(user_id, profile) {
            Ok(_) => imported += 1,
            Err(error) => {
                let payload = json!({
                    "error": error.to_string(),
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
            }
        }
    }

    let payload = json!({
        "imported": imported,
        "issues": import.issues,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
