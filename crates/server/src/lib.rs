//! # server
//!
//! REST API for stroke-risk data exploration: IQR outlier scans over posted
//! records, plus a proxy to the external prediction model service.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod predict;
pub mod routes;

pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use predict::{
    HttpPredictionService, PredictError, PredictionResponse, PredictionService, MODEL_FEATURES,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub predictor: Arc<dyn PredictionService>,
}

impl AppState {
    pub fn new(config: ServerConfig, predictor: Arc<dyn PredictionService>) -> Self {
        Self {
            config: Arc::new(config),
            predictor,
        }
    }
}

/// Build the router with middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        .route("/health", get(routes::liveness))
        // Model proxy
        .route("/features", get(routes::features))
        .route("/predict", post(routes::predict))
        // Outlier scans
        .route("/api/v1/outliers/bounds", post(routes::bounds))
        .route("/api/v1/outliers/detect", post(routes::detect))
        .route("/api/v1/outliers/flag", post(routes::flag))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
