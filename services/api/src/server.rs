use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, AppState, InMemoryApplicationStore, InMemoryNotificationPublisher,
    InMemoryProfileRepository,
};
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use welfare_engine::advisor::AdvisorService;
use welfare_engine::config::AppConfig;
use welfare_engine::error::AppError;
use welfare_engine::telemetry;

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

    let profiles = Arc::new(InMemoryProfileRepository::default());
    let applications = Arc::new(InMemoryApplicationStore::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let advisor_service = Arc::new(AdvisorService::new(
        profiles,
        applications,
        notifications,
        default_scoring_config(),
    ));

    let app = with_advisor_routes(advisor_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "citizen welfare advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
