use crate::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the CORS layer from configuration. Unparseable entries are skipped
/// with a warning rather than failing startup.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().filter_map(|o| {
            o.parse::<HeaderValue>()
                .inspect_err(|_| tracing::warn!(origin = %o, "ignoring invalid CORS origin"))
                .ok()
        }))
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| {
            m.parse::<Method>()
                .inspect_err(|_| tracing::warn!(method = %m, "ignoring invalid CORS method"))
                .ok()
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| {
            h.parse::<HeaderName>()
                .inspect_err(|_| tracing::warn!(header = %h, "ignoring invalid CORS header"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}
