use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryResultRepository};
use crate::routes::with_constitution_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tizhi::config::AppConfig;
use tizhi::constitution::{ConstitutionScorer, ConstitutionService};
use tizhi::error::AppError;
use tizhi::telemetry;
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

    let repository = Arc::new(InMemoryResultRepository::default());
    let constitution_service = Arc::new(ConstitutionService::new(
        repository,
        ConstitutionScorer::new(config.scoring),
    ));

    let app = with_constitution_routes(constitution_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        peace_threshold = config.scoring.threshold_peace,
        "constitution scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
