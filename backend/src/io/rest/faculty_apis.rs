//! REST API for faculty members.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::CreateFacultyRequest;
use tracing::info;

use super::{error_response, json_body};
use crate::AppState;

/// GET /api/faculty
pub async fn list_faculty(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/faculty");

    match state.faculty_service.list_faculty().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Failed to fetch faculty"),
    }
}

/// POST /api/faculty
pub async fn create_faculty(
    State(state): State<AppState>,
    payload: Result<Json<CreateFacultyRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/faculty");
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.faculty_service.create_faculty(request).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => error_response(e, "Failed to create faculty"),
    }
}
