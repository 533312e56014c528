use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::workflows::audit::client_profile::ClientProfile;
use crate::workflows::audit::domain::TranscriptTurn;

fn build_router() -> axum::Router {
    let (service, _, _) = build_service();
    audit_router_with_service(service)
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn post_audit_returns_summary_view() {
    let router = build_router();
    let intake = intake_with(polite_transcript(), Some(neutral_signals()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/audits")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&intake).expect("serialize intake"),
        ))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("audit_id").is_some());
    assert_eq!(
        payload.get("status").and_then(Value::as_str),
        Some("clear")
    );
    assert_eq!(
        payload.get("risk_score").and_then(Value::as_f64),
        Some(0.0)
    );
}

#[tokio::test]
async fn post_audit_with_prohibited_phrase_reports_escalation() {
    let router = build_router();
    let mut turns = polite_transcript();
    turns.push(TranscriptTurn::agent(
        "02:00",
        "Pay today or you are a criminal in our books.",
    ));
    let intake = intake_with(turns, Some(neutral_signals()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/audits")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&intake).expect("serialize intake"),
        ))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("status").and_then(Value::as_str),
        Some("escalated")
    );
    assert_eq!(
        payload.get("escalation_action").and_then(Value::as_str),
        Some("Immediate intervention required")
    );
    assert!(payload
        .get("requires_immediate_action")
        .and_then(Value::as_bool)
        .is_some());
}

#[tokio::test]
async fn post_audit_rejects_invalid_profile_override() {
    let router = build_router();
    let mut profile = ClientProfile::default();
    profile.risk_scoring.critical_threshold = 250;
    let mut intake = intake_with(polite_transcript(), Some(neutral_signals()));
    intake.client_profile = Some(profile);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/audits")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&intake).expect("serialize intake"),
        ))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("critical_threshold"));
}

#[tokio::test]
async fn get_unknown_audit_returns_pending_view() {
    let router = build_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/audits/audit-999999")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("audit_id"), Some(&json!("audit-999999")));
    assert_eq!(
        payload.get("status").and_then(Value::as_str),
        Some("pending_review")
    );
    assert!(matches!(
        payload.get("risk_score"),
        None | Some(Value::Null)
    ));
}

#[tokio::test]
async fn get_stored_audit_returns_persisted_view() {
    let (service, _, _) = build_service();
    let record = service
        .audit(intake_with(polite_transcript(), Some(neutral_signals())))
        .expect("audit succeeds");

    let router = audit_router_with_service(service);
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/audits/{}", record.audit_id.0))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("audit_id").and_then(Value::as_str),
        Some(record.audit_id.0.as_str())
    );
    assert_eq!(
        payload.get("primary_outcome").and_then(Value::as_str),
        Some("Resolved")
    );
}
