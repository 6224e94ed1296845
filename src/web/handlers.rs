use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde::Serialize;
use tracing::warn;

use crate::collector::request_from_fields;
use crate::domain::{FeatureColumn, PredictionRequest, RequestBuilder, CANONICAL_ORDER};
use crate::error::CardioError;
use crate::report::RiskAssessment;
use crate::session::assess;
use crate::web::page::{render_page, PageView};
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub uptime_secs: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn status_for(err: &CardioError) -> StatusCode {
    match err {
        CardioError::InvalidInput { .. } | CardioError::Validation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET / -- form with default values
pub async fn index() -> Html<String> {
    Html(render_page(&PageView::new(PredictionRequest::default())))
}

/// POST /predict -- form submission, page re-rendered with the result
pub async fn predict_form(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, Html<String>) {
    let outcome = request_from_fields(&fields)
        .and_then(|request| assess(&state.predictor, &request).map(|a| (request, a)));

    match outcome {
        Ok((request, assessment)) => {
            let view = PageView::new(request).with_assessment(assessment);
            (StatusCode::OK, Html(render_page(&view)))
        }
        Err(e) => {
            warn!(error = %e, "form submission rejected");
            let status = status_for(&e);
            let message = if status == StatusCode::UNPROCESSABLE_ENTITY {
                e.to_string()
            } else {
                format!("Terjadi kesalahan saat prediksi: {e}")
            };
            let view = PageView::new(salvage(&fields)).with_error(message);
            (status, Html(render_page(&view)))
        }
    }
}

/// POST /api/predict -- JSON request, JSON assessment
pub async fn predict_json(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PredictionRequest>, JsonRejection>,
) -> std::result::Result<Json<RiskAssessment>, (StatusCode, Json<ErrorResponse>)> {
    // Unknown labels and malformed bodies get the same JSON error shape.
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "api request rejected");
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })?;
    assess(&state.predictor, &request).map(Json).map_err(|e| {
        warn!(error = %e, "api prediction failed");
        (
            status_for(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

/// GET /health -- liveness probe
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.predictor.artifacts().classifier().describe(),
        uptime_secs: state.uptime_seconds(),
    })
}

/// Keep whatever submitted values are valid so a rejected form is not wiped.
fn salvage(fields: &HashMap<String, String>) -> PredictionRequest {
    CANONICAL_ORDER
        .iter()
        .fold(RequestBuilder::new(), |builder, column: &FeatureColumn| {
            match fields.get(column.name()) {
                Some(raw) => builder.clone().set(*column, raw).unwrap_or(builder),
                None => builder,
            }
        })
        .build()
}
