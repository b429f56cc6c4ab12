//! Health handlers

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe
///
/// The store is in-process, so readiness coincides with liveness.
pub async fn readiness_check() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
