use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::JobApplication;
use super::evaluation::EvaluationError;
use super::service::{EvaluationView, ScreeningService, ValidatorSource};

/// Router builder exposing the evaluation endpoint.
pub fn screening_router<S>(service: Arc<ScreeningService<S>>) -> Router
where
    S: ValidatorSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/applications/evaluate",
            post(evaluate_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<ScreeningService<S>>>,
    axum::Json(application): axum::Json<JobApplication>,
) -> Response
where
    S: ValidatorSource + 'static,
{
    match service.evaluate(&application) {
        Ok(outcome) => {
            let view = EvaluationView::from(&outcome);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(EvaluationError::MissingApplicant) => {
            let payload = json!({
                "error": EvaluationError::MissingApplicant.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(EvaluationError::Validator(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
