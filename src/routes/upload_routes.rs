use crate::handlers::upload_handler;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::post, Router};

/// Body size is enforced per field while streaming, so the framework-wide
/// default limit is lifted for this route.
pub fn create_upload_routes() -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload_handler).layer(DefaultBodyLimit::disable()),
    )
}
