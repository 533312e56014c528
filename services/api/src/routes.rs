use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use call_audit::error::AppError;
use call_audit::workflows::audit::{
    audit_router, AlertPublisher, AuditIntake, AuditRepository, CallAuditService, CallSignals,
    ClientProfile, TranscriptCsvImporter,
};

/// Request for auditing a call delivered as a raw diarized CSV export
/// instead of pre-parsed transcript turns.
#[derive(Debug, Deserialize)]
pub(crate) struct ImportAuditRequest {
    pub(crate) transcript_csv: String,
    #[serde(default)]
    pub(crate) signals: Option<CallSignals>,
    #[serde(default)]
    pub(crate) time_violation: bool,
    #[serde(default)]
    pub(crate) call_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) client_profile: Option<ClientProfile>,
}

pub(crate) fn with_audit_routes<R, A>(service: Arc<CallAuditService<R, A>>) -> Router
where
    R: AuditRepository + 'static,
    A: AlertPublisher + 'static,
{
    let import_routes = Router::new()
        .route("/api/v1/audits/import", post(import_endpoint::<R, A>))
        .with_state(service.clone());

    audit_router(service)
        .merge(import_routes)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
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

pub(crate) async fn import_endpoint<R, A>(
    State(service): State<Arc<CallAuditService<R, A>>>,
    Json(payload): Json<ImportAuditRequest>,
) -> Result<Response, AppError>
where
    R: AuditRepository + 'static,
    A: AlertPublisher + 'static,
{
    let ImportAuditRequest {
        transcript_csv,
        signals,
        time_violation,
        call_timestamp,
        client_profile,
    } = payload;

    let reader = Cursor::new(transcript_csv.into_bytes());
    let transcript_turns = TranscriptCsvImporter::from_reader(reader)?;

    let intake = AuditIntake {
        call_timestamp,
        transcript_turns,
        acoustic_segments: Vec::new(),
        signals,
        time_violation,
        client_profile,
    };

    let record = service.audit(intake)?;
    Ok((StatusCode::CREATED, Json(record.summary_view())).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryAlertPublisher, InMemoryAuditRepository};

    fn service() -> Arc<CallAuditService<InMemoryAuditRepository, InMemoryAlertPublisher>> {
        Arc::new(CallAuditService::new(
            Arc::new(InMemoryAuditRepository::default()),
            Arc::new(InMemoryAlertPublisher::default()),
            ClientProfile::default(),
        ))
    }

    #[tokio::test]
    async fn import_endpoint_audits_a_csv_transcript() {
        let request = ImportAuditRequest {
            transcript_csv: "Timestamp,Speaker,Message\n\
                00:05,Agent,Good morning. I can help with the overdue amount.\n\
                00:15,Customer,\"Thank you, the issue is resolved now.\"\n"
                .to_string(),
            signals: None,
            time_violation: false,
            call_timestamp: None,
            client_profile: None,
        };

        let response = import_endpoint(State(service()), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn import_endpoint_rejects_malformed_csv() {
        let request = ImportAuditRequest {
            transcript_csv: "Timestamp,Speaker\n00:05,Agent,too,many,fields\n".to_string(),
            signals: None,
            time_violation: false,
            call_timestamp: None,
            client_profile: None,
        };

        let response = import_endpoint(State(service()), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
