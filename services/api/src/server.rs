use crate::cli::ServeArgs;
use crate::infra::{
    load_client_profile, AppState, InMemoryAlertPublisher, InMemoryAuditRepository,
};
use crate::routes::with_audit_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use call_audit::config::AppConfig;
use call_audit::error::AppError;
use call_audit::telemetry;
use call_audit::workflows::audit::CallAuditService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAuditRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let profile = load_client_profile(config.audit.client_profile_path.as_deref());
    let audit_service = Arc::new(CallAuditService::new(repository, alerts, profile));

    let app = with_audit_routes(audit_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "call audit service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
