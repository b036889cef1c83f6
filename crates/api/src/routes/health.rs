use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check: verifies the CMS answers.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let gateway = state.gateway();
    if gateway.is_offline() {
        return Ok(Json(json!({ "status": "ok", "cms": "offline" })));
    }

    gateway.ping().await?;

    Ok(Json(json!({ "status": "ok", "cms": "connected" })))
}

/// Lightweight ping, no CMS check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
