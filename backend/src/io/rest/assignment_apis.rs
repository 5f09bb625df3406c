//! REST API for faculty assignments. Listing returns rows joined with faculty,
//! subject and class details.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::CreateAssignmentRequest;
use tracing::info;

use super::{error_response, json_body};
use crate::AppState;

/// GET /api/assignments
pub async fn list_assignments(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/assignments");

    match state.assignment_service.list_assignments().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Failed to fetch faculty assignments"),
    }
}

/// POST /api/assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAssignmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/assignments");
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.assignment_service.create_assignment(request).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => error_response(e, "Failed to create faculty assignment"),
    }
}
