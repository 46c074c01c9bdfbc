//! API route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use outlier::{
    compute_all_bounds, dataset_from_records, flag_anomalies, AnomalyTable, Bounds,
    CollectingReporter, Column, Dataset, IqrScanner, OutlierScanner, ScanConfig,
    ScanConfigBuilder, ScanMode,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{AppError, AppResult};
use crate::predict::MODEL_FEATURES;
use crate::AppState;

// ============================================================================
// Health
// ============================================================================

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fences on a known sample must flag exactly its last row.
fn outlier_self_check() -> bool {
    let Ok(ds) = Dataset::new(vec![Column::from_f64("v", [1.0, 2.0, 3.0, 4.0, 100.0])]) else {
        return false;
    };
    matches!(flag_anomalies(&ds, &["v"]), Ok(mask) if mask == [false, false, false, false, true])
}

/// Readiness probe - is the server ready to handle requests?
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let healthy = outlier_self_check();
    let (status, code) = if healthy {
        ("ready", StatusCode::OK)
    } else {
        tracing::error!("outlier self-check failed");
        ("not_ready", StatusCode::SERVICE_UNAVAILABLE)
    };

    let body = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "checks": [
            { "name": "outliers", "status": if healthy { "healthy" } else { "unhealthy" } },
            { "name": "model_service", "target": state.predictor.name() },
        ]
    });
    (code, Json(body))
}

// ============================================================================
// Model proxy
// ============================================================================

pub async fn features() -> Json<Vec<&'static str>> {
    Json(MODEL_FEATURES.to_vec())
}

/// Forward a flat feature record to the model service.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let record = match body {
        Value::Object(map) => map,
        _ => {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ))
        }
    };

    tracing::debug!(fields = record.len(), "forwarding prediction request");
    let prediction = state.predictor.predict(&record).await?;

    Ok(Json(json!({
        "success": true,
        "prediction": prediction,
    })))
}

// ============================================================================
// Outlier scans
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub records: Vec<Map<String, Value>>,
    pub features: Vec<String>,
    pub multiplier: Option<f64>,
    pub mode: Option<ScanMode>,
}

impl ScanRequest {
    fn dataset(&self) -> AppResult<Dataset> {
        Ok(dataset_from_records(&self.records)?)
    }

    fn feature_refs(&self) -> Vec<&str> {
        self.features.iter().map(String::as_str).collect()
    }

    fn config(&self, default_mode: ScanMode) -> AppResult<ScanConfig> {
        let mut builder = ScanConfigBuilder::new().mode(self.mode.unwrap_or(default_mode));
        if let Some(multiplier) = self.multiplier {
            builder = builder.multiplier(multiplier);
        }
        Ok(builder.build()?)
    }
}

/// Run CPU-bound scan work on the blocking pool.
async fn run_blocking<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("scan task failed: {}", e)))?
}

fn parse_scan(payload: Result<Json<ScanRequest>, JsonRejection>) -> AppResult<ScanRequest> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

#[derive(Debug, Serialize)]
pub struct BoundsResponse {
    pub success: bool,
    pub bounds: Vec<Bounds>,
}

/// Fences for every requested feature; any invalid feature fails the call.
pub async fn bounds(
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> AppResult<Json<BoundsResponse>> {
    let req = parse_scan(payload)?;
    let bounds = run_blocking(move || {
        let ds = req.dataset()?;
        let config = req.config(ScanMode::Strict)?;
        Ok(compute_all_bounds(&ds, &req.feature_refs(), &config.iqr)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?)
    })
    .await?;

    Ok(Json(BoundsResponse {
        success: true,
        bounds,
    }))
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub success: bool,
    pub anomaly_count: usize,
    pub table: AnomalyTable,
    pub diagnostics: Vec<String>,
}

/// Anomalous rows projected onto the requested features. Lenient unless
/// the request asks for `"mode": "strict"`.
pub async fn detect(
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> AppResult<Json<DetectResponse>> {
    let req = parse_scan(payload)?;
    let (table, diagnostics) = run_blocking(move || {
        let ds = req.dataset()?;
        let scanner = IqrScanner::new(req.config(ScanMode::Lenient)?);

        let mut reporter = CollectingReporter::new();
        let table = scanner.detect(&ds, &req.feature_refs(), &mut reporter)?;
        tracing::debug!(
            rows = ds.row_count(),
            anomalies = table.len(),
            "detection scan finished"
        );
        Ok((table, reporter.lines()))
    })
    .await?;

    Ok(Json(DetectResponse {
        success: true,
        anomaly_count: table.len(),
        table,
        diagnostics,
    }))
}

#[derive(Debug, Serialize)]
pub struct FlagResponse {
    pub success: bool,
    pub anomaly_count: usize,
    pub mask: Vec<bool>,
}

/// Row-aligned outlier mask. Strict unless the request asks for
/// `"mode": "lenient"`.
pub async fn flag(
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> AppResult<Json<FlagResponse>> {
    let req = parse_scan(payload)?;
    let mask = run_blocking(move || {
        let ds = req.dataset()?;
        let scanner = IqrScanner::new(req.config(ScanMode::Strict)?);

        let mut reporter = CollectingReporter::new();
        let mask = scanner.flag(&ds, &req.feature_refs(), &mut reporter)?;
        for line in reporter.lines() {
            tracing::info!("{}", line);
        }
        Ok(mask)
    })
    .await?;

    Ok(Json(FlagResponse {
        success: true,
        anomaly_count: mask.iter().filter(|&&flagged| flagged).count(),
        mask,
    }))
}
