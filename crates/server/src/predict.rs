//! Client for the external stroke-risk model service

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Input features the model service expects.
pub const MODEL_FEATURES: [&str; 10] = [
    "age",
    "hypertension",
    "heart_disease",
    "ever_married",
    "residence_type",
    "avg_glucose_level",
    "bmi",
    "gender",
    "work_type",
    "smoking_status",
];

/// Model service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Predicted stroke probability
    pub prediction: f64,
    /// Per-feature importance scores
    #[serde(default)]
    pub feature_importances: BTreeMap<String, f64>,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Prediction errors.
#[derive(Debug, Clone, Error)]
pub enum PredictError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Prediction rejected: {0}")]
    Rejected(String),
}

/// Opaque prediction backend.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Backend name, for health reporting.
    fn name(&self) -> &str;

    /// Score a flat feature record.
    async fn predict(&self, record: &Map<String, Value>) -> Result<PredictionResponse, PredictError>;
}

/// Model service reached over HTTP at `{base_url}/predict`.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictionService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PredictError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

/// Interpret a model service body, turning `success: false` into an error.
pub fn parse_prediction(body: &str) -> Result<PredictionResponse, PredictError> {
    let response: PredictionResponse =
        serde_json::from_str(body).map_err(|e| PredictError::ParseError(e.to_string()))?;
    if !response.success {
        return Err(PredictError::Rejected(
            response
                .error
                .unwrap_or_else(|| "model service reported failure".to_string()),
        ));
    }
    Ok(response)
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn predict(&self, record: &Map<String, Value>) -> Result<PredictionResponse, PredictError> {
        let response = self
            .client
            .post(self.predict_url())
            .json(record)
            .send()
            .await
            .map_err(|e| PredictError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PredictError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_prediction(&body)
    }
}
