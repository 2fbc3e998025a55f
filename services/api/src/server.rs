use crate::cli::ServeArgs;
use crate::infra::{AppState, StaticValidatorSource};
use crate::routes::with_screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_screening::config::AppConfig;
use job_screening::error::AppError;
use job_screening::screening::ScreeningService;
use job_screening::telemetry::{self, LogSink};
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

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let validators = Arc::new(StaticValidatorSource::from_args(
        &args.validator,
        &config.screening,
    ));
    let service = Arc::new(ScreeningService::new(validators, config.screening.clone()));

    let app = with_screening_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        home_country = %config.screening.home_country,
        "job screening service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
