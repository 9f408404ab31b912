//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the Careflow REST API server on its own, with OpenAPI/Swagger UI.
//!
//! ## Environment Variables
//! - `CAREFLOW_REST_ADDR`: server address (default: "0.0.0.0:3000")
//! - `CAREFLOW_DATA_DIR`: record storage directory (default: "/careflow_data")
//! - `CAREFLOW_CONFIG`: optional path to the deployment YAML config

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use careflow_records::{CareConfig, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("CAREFLOW_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Careflow REST API on {}", addr);

    let data_dir = std::env::var("CAREFLOW_DATA_DIR").unwrap_or_else(|_| "/careflow_data".into());
    let data_path = Path::new(&data_dir);
    if !data_path.exists() {
        anyhow::bail!("Record data directory does not exist: {}", data_path.display());
    }

    let config_path = std::env::var("CAREFLOW_CONFIG").ok().map(PathBuf::from);
    let cfg = Arc::new(CareConfig::load(config_path.as_deref())?);
    if cfg.wartime_shifting() {
        tracing::info!("-- Wartime shifting workflow enabled");
    }

    let state = AppState::new(cfg, Arc::new(RecordStore::new(data_path)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
