use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryGroupDirectory, InMemoryPositionDirectory, InMemoryRuleStore};
use crate::routes::with_conformance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use leave_planner::config::AppConfig;
use leave_planner::error::AppError;
use leave_planner::telemetry;
use leave_planner::workflows::vacation::{ConformanceConfig, ScheduleConformanceService};
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

    let rule_store = InMemoryRuleStore::default();
    let groups = InMemoryGroupDirectory::default();
    let positions = InMemoryPositionDirectory::default();
    let conformance_config = ConformanceConfig {
        window_policy: config.conformance.window_policy,
    };
    let conformance_service = Arc::new(ScheduleConformanceService::new(
        Arc::new(rule_store.clone()),
        Arc::new(groups),
        Arc::new(positions),
        conformance_config,
    ));

    let app = with_conformance_routes(conformance_service)
        .layer(Extension(app_state))
        .layer(Extension(rule_store))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        policy = config.conformance.window_policy.label(),
        "vacation scheduling service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
