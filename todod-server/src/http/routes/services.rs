//! Render proxy endpoint
//!
//! Pure pass-through: authenticate, forward one GET, relay the JSON.
//! Failures surface as the fixed 500 text; the cause stays in the logs.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /services - relay the Render service list verbatim
async fn list_services(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let services = state.render.list_services().await?;

    Ok(Json(services))
}

/// Proxy routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/services", get(list_services))
}
