use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;

pub async fn get_api_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    use serde_json::json;
    Json(json!({
        "status": "healthy",
        "upload_root": state.upload_service.root().display().to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
