//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use outlier::OutlierError;
use serde_json::json;
use thiserror::Error;

use crate::predict::PredictError;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Outlier(#[from] OutlierError),

    #[error(transparent)]
    Prediction(#[from] PredictError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Outlier(e) if e.is_feature_error() => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Outlier(_) => StatusCode::BAD_REQUEST,
            AppError::Prediction(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Prediction(e) => tracing::warn!(error = %e, "prediction failed"),
            AppError::Internal(e) => tracing::error!(error = %e, "internal error"),
            _ => tracing::debug!(error = %self, status = status.as_u16(), "request rejected"),
        }

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
