use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::web::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS only matters for the JSON endpoint; the form page is same-origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/predict", post(handlers::predict_json))
        .layer(cors);

    Router::new()
        // Form page
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict_form))
        // System endpoints
        .route("/health", get(handlers::health_handler))
        .merge(api)
        .with_state(state)
}
