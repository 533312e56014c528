use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AuditId, AuditIntake};
use super::repository::{AlertPublisher, AuditRepository, RepositoryError};
use super::service::{AuditServiceError, CallAuditService};

/// Router builder exposing HTTP endpoints for audit intake and retrieval.
pub fn audit_router<R, A>(service: Arc<CallAuditService<R, A>>) -> Router
where
    R: AuditRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/audits", post(submit_handler::<R, A>))
        .route("/api/v1/audits/:audit_id", get(status_handler::<R, A>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<CallAuditService<R, A>>>,
    axum::Json(intake): axum::Json<AuditIntake>,
) -> Response
where
    R: AuditRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.audit(intake) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(AuditServiceError::Profile(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AuditServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "audit already exists",
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

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<CallAuditService<R, A>>>,
    Path(audit_id): Path<String>,
) -> Response
where
    R: AuditRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = AuditId(audit_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AuditServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "audit_id": id.0,
                "status": "pending_review",
                "risk_score": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
