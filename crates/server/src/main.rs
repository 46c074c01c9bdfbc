//! # stroke-eda-server
//!
//! REST API server for stroke-risk outlier scans and model predictions.

use std::sync::Arc;

use server::{create_app, AppState, HttpPredictionService, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;

    let predictor = HttpPredictionService::new(&config.model_service_url, config.model_timeout)?;
    tracing::info!(
        model_service = %config.model_service_url,
        timeout_secs = config.model_timeout.as_secs(),
        "model service configured"
    );

    let app = create_app(AppState::new(config, Arc::new(predictor)));

    tracing::info!("stroke-eda-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
