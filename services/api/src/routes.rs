use crate::infra::{AppState, AssessmentMode};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sra_ai::assessment::polish::OrganizationContext;
use sra_ai::assessment::report::views::ReportView;
use sra_ai::assessment::{generate_report, AnswerSet};
use sra_ai::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentReportRequest {
    #[serde(default)]
    pub(crate) organization: OrganizationContext,
    #[serde(default)]
    pub(crate) mode: AssessmentMode,
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) use_ai_polish: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReportResponse {
    pub(crate) mode: AssessmentMode,
    pub(crate) polish_enabled: bool,
    #[serde(flatten)]
    pub(crate) report: ReportView,
}

pub(crate) fn assessment_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/report", post(assessment_report_endpoint))
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

pub(crate) async fn assessment_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentReportRequest>,
) -> Result<Json<AssessmentReportResponse>, AppError> {
    let AssessmentReportRequest {
        organization,
        mode,
        answers,
        use_ai_polish,
    } = payload;

    let polisher = if use_ai_polish {
        state.polisher.clone()
    } else {
        None
    };
    let polish_enabled = polisher.is_some();

    // The polish client blocks on its own runtime, so the whole evaluation
    // runs off the async worker threads.
    let report = tokio::task::spawn_blocking(move || {
        let catalog = mode.catalog();
        generate_report(
            &organization,
            &catalog,
            &answers,
            polisher.as_deref(),
        )
    })
    .await
    .map_err(|err| AppError::Server(axum::Error::new(err)))?;

    Ok(Json(AssessmentReportResponse {
        mode,
        polish_enabled,
        report: report.view(),
    }))
}
