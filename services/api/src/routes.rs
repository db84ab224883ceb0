use crate::infra::{default_scoring_config, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use welfare_engine::advisor::report::views::{CohortInsights, CohortSummary};
use welfare_engine::advisor::report::{CohortEntry, CohortReport};
use welfare_engine::advisor::{
    advisor_router, AdvisorService, ApplicationStore, NotificationPublisher, ProfileRepository,
    SchemeCatalog, ScoringEngine,
};
use welfare_engine::error::AppError;
use welfare_engine::roster::{RosterImporter, RosterIssue};

#[derive(Debug, Deserialize)]
pub(crate) struct RosterReportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterReportResponse {
    pub(crate) summary: CohortSummary,
    pub(crate) insights: CohortInsights,
    pub(crate) issues: Vec<RosterIssue>,
}

pub(crate) fn with_advisor_routes<P, A, N>(service: Arc<AdvisorService<P, A, N>>) -> axum::Router
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    advisor_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/advisor/roster/report",
            axum::routing::post(roster_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless cohort preview over a roster CSV. Nothing is persisted, so
/// program reviewers can sanity-check an export before importing it.
pub(crate) async fn roster_report_endpoint(
    Json(payload): Json<RosterReportRequest>,
) -> Result<Json<RosterReportResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let import = RosterImporter::from_reader(reader)?;

    let engine = ScoringEngine::new(default_scoring_config());
    let catalog = SchemeCatalog::standard();
    let entries: Vec<CohortEntry> = import
        .profiles
        .into_iter()
        .map(|(user_id, profile)| CohortEntry {
            user_id,
            profile,
            completed_applications: 0,
        })
        .collect();

    let report = CohortReport::build(&entries, catalog.schemes(), &engine);
    let summary = report.summary();
    let insights = summary.insights();

    Ok(Json(RosterReportResponse {
        summary,
        insights,
        issues: import.issues,
    }))
}
