use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::advisor::domain::UserId;
use crate::advisor::repository::ProfileRepository;
use crate::advisor::router::{ApplicationRequest, ScoreRequest};
use crate::advisor::AdvisorService;

fn post_json(uri: &str, body: Vec<u8>) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

#[tokio::test]
async fn apply_handler_returns_conflict_on_duplicate() {
    let profiles = Arc::new(MemoryProfiles::default());
    profiles
        .upsert(UserId("citizen-1".to_string()), farmer_profile())
        .expect("seed profile");
    let service = Arc::new(AdvisorService::new(
        profiles,
        Arc::new(ConflictApplications),
        Arc::new(MemoryNotifications::default()),
        scoring_config(),
    ));

    let response = crate::advisor::router::apply_handler::<
        MemoryProfiles,
        ConflictApplications,
        MemoryNotifications,
    >(
        State(service),
        axum::Json(ApplicationRequest {
            user_id: UserId("citizen-1".to_string()),
            scheme_id: "agri-1".to_string(),
            applied_on: NaiveDate::from_ymd_opt(2026, 3, 14),
        }),
    )
    .await;

    assert_conflict_response(response);
}

#[tokio::test]
async fn report_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(AdvisorService::new(
        Arc::new(UnavailableProfiles),
        Arc::new(MemoryApplications::default()),
        Arc::new(MemoryNotifications::default()),
        scoring_config(),
    ));

    let response = crate::advisor::router::report_handler::<
        UnavailableProfiles,
        MemoryApplications,
        MemoryNotifications,
    >(State(service), Path("citizen-1".to_string()))
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn save_route_returns_the_stored_copy() {
    let (service, _, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/advisor/profiles/citizen-1",
            serde_json::to_vec(&farmer_profile()).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["profile"]["state"], json!("Bihar"));
    assert_eq!(payload["warnings"], json!([]));
}

#[tokio::test]
async fn report_route_returns_the_advisory() {
    let (service, _, _, _) = build_service();
    service
        .save_profile(UserId("citizen-2".to_string()), farmer_profile())
        .expect("save succeeds");
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/advisor/profiles/citizen-2/report"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["user_id"], json!("citizen-2"));
    assert_eq!(payload["score"]["total"], json!(84));
    assert_eq!(payload["score"]["risk_category"], json!("high"));
    assert_eq!(payload["recommendations"][0]["scheme"]["id"], json!("fin-1"));
    assert_eq!(payload["completed_applications"], json!(0));
}

#[tokio::test]
async fn report_route_returns_not_found_for_unknown_citizens() {
    let (service, _, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/advisor/profiles/ghost/report"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("profile not found"));
    assert_eq!(payload["user_id"], json!("ghost"));
}

#[tokio::test]
async fn apply_route_accepts_tracked_applications() {
    let (service, _, _, _) = build_service();
    service
        .save_profile(UserId("citizen-3".to_string()), farmer_profile())
        .expect("save succeeds");
    let router = advisor_router_with_service(service);

    let request = ApplicationRequest {
        user_id: UserId("citizen-3".to_string()),
        scheme_id: "agri-1".to_string(),
        applied_on: NaiveDate::from_ymd_opt(2026, 3, 14),
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/advisor/applications",
            serde_json::to_vec(&request).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload["id"].as_str().is_some());
    assert_eq!(payload["status"], json!("applied"));
    assert_eq!(payload["applied_on"], json!("2026-03-14"));
}

#[tokio::test]
async fn apply_route_rejects_unknown_schemes() {
    let (service, _, _, _) = build_service();
    service
        .save_profile(UserId("citizen-4".to_string()), farmer_profile())
        .expect("save succeeds");
    let router = advisor_router_with_service(service);

    let request = ApplicationRequest {
        user_id: UserId("citizen-4".to_string()),
        scheme_id: "no-such-scheme".to_string(),
        applied_on: None,
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/advisor/applications",
            serde_json::to_vec(&request).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("unknown scheme: no-such-scheme"));
}

#[tokio::test]
async fn status_route_approves_and_notifies() {
    let (service, _, _, notifications) = build_service();
    service
        .save_profile(UserId("citizen-5".to_string()), farmer_profile())
        .expect("save succeeds");
    let router = advisor_router_with_service(service);

    let request = ApplicationRequest {
        user_id: UserId("citizen-5".to_string()),
        scheme_id: "fin-1".to_string(),
        applied_on: NaiveDate::from_ymd_opt(2026, 3, 14),
    };
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/advisor/applications",
            serde_json::to_vec(&request).unwrap(),
        ))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    let application_id = payload["id"].as_str().expect("application id").to_string();

    let response = router
        .oneshot(post_json(
            &format!("/api/v1/advisor/applications/{application_id}/status"),
            serde_json::to_vec(&json!({"status": "approved"})).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], json!("approved"));

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].message,
        "Your PM Jan Dhan Yojana application has been approved!"
    );
}

#[tokio::test]
async fn status_route_returns_not_found_for_unknown_applications() {
    let (service, _, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/advisor/applications/app-unknown/status",
            serde_json::to_vec(&json!({"status": "approved"})).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("application not found"));
}

#[tokio::test]
async fn score_route_is_stateless() {
    let (service, profiles, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let request = ScoreRequest {
        profile: farmer_profile(),
        completed_applications: 3,
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/advisor/score",
            serde_json::to_vec(&request).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"]["total"], json!(90));
    assert!(payload.get("user_id").is_none());

    assert!(profiles.all().expect("listing succeeds").is_empty());
}

#[tokio::test]
async fn validate_route_reports_warnings_for_partial_drafts() {
    let (service, _, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/advisor/validate",
            serde_json::to_vec(&json!({"age": 12})).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["warnings"], json!(["Age value appears invalid"]));
}

#[tokio::test]
async fn cohort_route_renders_summary_and_insights() {
    let (service, _, _, _) = build_service();
    service
        .save_profile(UserId("citizen-6".to_string()), farmer_profile())
        .expect("save succeeds");
    service
        .save_profile(UserId("citizen-7".to_string()), student_profile())
        .expect("save succeeds");
    let router = advisor_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/advisor/cohort"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary"]["total_profiles"], json!(2));
    assert_eq!(payload["summary"]["high_risk_profiles"], json!(1));
    assert!(payload["insights"]["observations"].is_array());
}

#[tokio::test]
async fn roster_route_imports_profiles_and_reports_issues() {
    let (service, _, _, _) = build_service();
    let router = advisor_router_with_service(service);

    let csv = "Citizen ID,Age,Annual Income,Occupation,Education,Gender,Area,State,Family Size,Health Insurance,Pension,Family Members\n\
               ctz-100,45,180000,Farmer,Secondary,Male,Rural,Bihar,5,No,No,Student:0;Housewife:0\n\
               ctz-101,30,900000,Salaried,Postgraduate,Female,Urban,Karnataka,2,Yes,Yes,Salaried:600000\n\
               ctz-102,,250000,Farmer,Secondary,Male,Rural,Bihar,3,No,No,";

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/advisor/roster",
            serde_json::to_vec(&json!({"csv": csv})).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["imported"], json!(2));
    assert_eq!(payload["issues"][0]["row"], json!(4));
    assert_eq!(payload["issues"][0]["reason"], json!("missing age"));

    let response = router
        .oneshot(get_request("/api/v1/advisor/profiles/ctz-100/report"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"]["total"], json!(84));
}
