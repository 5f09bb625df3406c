//! REST API for marks. The total is computed server-side on create.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::CreateMarkRequest;
use tracing::info;

use super::{error_response, json_body};
use crate::AppState;

/// GET /api/marks
pub async fn list_marks(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/marks");

    match state.mark_service.list_marks().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Failed to fetch marks"),
    }
}

/// POST /api/marks
pub async fn create_mark(
    State(state): State<AppState>,
    payload: Result<Json<CreateMarkRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/marks");
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.mark_service.create_mark(request).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => error_response(e, "Failed to create marks"),
    }
}
