use crate::cli::ServeArgs;
use crate::infra::{build_polisher, AppState};
use crate::routes::assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sra_ai::assessment::QuestionCatalog;
use sra_ai::config::AppConfig;
use sra_ai::error::AppError;
use sra_ai::telemetry;
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

    // The full catalog contains the core one; a single invariant check at
    // boot covers both shipped libraries.
    QuestionCatalog::from_questions(QuestionCatalog::full().questions().to_vec())?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let polisher = build_polisher(&config.polish);
    if polisher.is_none() {
        info!("AI polish disabled; findings keep rule-generated text");
    }

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        polisher,
    };

    let app = assessment_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "HIPAA risk assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
