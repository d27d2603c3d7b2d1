use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - liveness of the process and reachability of the database
///
/// 503 when the database does not answer.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, database) = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "operational"),
        Err(e) => {
            warn!("Health check: database unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - the process is up and serving
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
