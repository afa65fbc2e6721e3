pub mod health_routes;
pub mod upload_routes;

pub use health_routes::*;
pub use upload_routes::*;

use crate::config::Settings;
use crate::middleware::{cors_layer, logging};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

/// Assemble the full application: API routes, optional static front-end,
/// CORS and request logging.
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let mut router = Router::new()
        .merge(create_health_routes())
        .merge(create_upload_routes());

    if let Some(dir) = &settings.static_files.dir {
        tracing::info!(dir = %dir, "serving static files");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer(&settings.cors))
                .layer(axum::middleware::from_fn(logging::log_requests)),
        )
        .with_state(state)
}
