mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod tests;
mod utils;

use config::Settings;
use routes::create_router;
use services::{StagingService, UploadService};
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::{resolve_staging_dir, resolve_upload_root, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "doc_uploader=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration ({}), using defaults", e);
        Settings::default()
    });

    tracing::info!("Starting upload server...");
    tracing::info!("Configuration: {:?}", settings);

    let upload_root = resolve_upload_root(&settings.upload)?;
    let upload_service = Arc::new(
        UploadService::new(&upload_root).await.map_err(|e| {
            anyhow::anyhow!("Failed to create upload root {}: {}", upload_root.display(), e)
        })?,
    );

    let staging_dir = resolve_staging_dir(&settings.upload);
    let staging = Arc::new(
        StagingService::new(&staging_dir, settings.upload.max_file_size)
            .await
            .map_err(|e| {
                anyhow::anyhow!("Failed to create staging dir {}: {}", staging_dir.display(), e)
            })?,
    );

    let app_state = AppState::new(upload_service, staging, settings.upload.max_field_size);
    let app = create_router(app_state, &settings);

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
