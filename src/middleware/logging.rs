use axum::{body::Body, http::Request, middleware::Next, response::IntoResponse};
use std::time::Instant;
use tracing::{debug, error, info};

/// Middleware function to log all incoming requests
pub async fn log_requests(req: Request<Body>, next: Next) -> impl IntoResponse {
    let method = req.method().clone();
    let uri = req.uri().clone();

    info!("Incoming request: {} {}", method, uri);

    if let Some(content_type) = req.headers().get(axum::http::header::CONTENT_TYPE) {
        debug!("Content-Type: {:?}", content_type);
    }
    if let Some(length) = req.headers().get(axum::http::header::CONTENT_LENGTH) {
        debug!("Content-Length: {:?}", length);
    }

    let started = Instant::now();
    let response = next.run(req).await;
    let elapsed = started.elapsed();

    let status = response.status();
    info!(
        "Response status for {} {}: {} ({} ms)",
        method,
        uri,
        status,
        elapsed.as_millis()
    );

    if status.is_server_error() {
        error!("Error response for {} {}: {}", method, uri, status);
    }

    response
}
