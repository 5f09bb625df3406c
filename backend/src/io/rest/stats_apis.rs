use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, info};

use super::error_response;
use crate::AppState;

/// GET /api/stats
pub async fn dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/stats");

    match state.stats_service.dashboard_stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => error_response(e, "Failed to fetch dashboard stats"),
    }
}

/// GET /api/debug-db
///
/// Unlike the other endpoints the failure body carries the underlying message.
pub async fn debug_db(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/debug-db");

    match state.stats_service.diagnostics().await {
        Ok(diagnostics) => (StatusCode::OK, Json(diagnostics)).into_response(),
        Err(e) => {
            error!("Database debug error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to connect to database",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
