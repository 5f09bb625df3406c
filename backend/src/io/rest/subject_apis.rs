//! REST API for subjects.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::CreateSubjectRequest;
use tracing::info;

use super::{error_response, json_body};
use crate::AppState;

/// GET /api/subjects
pub async fn list_subjects(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/subjects");

    match state.subject_service.list_subjects().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Failed to fetch subjects"),
    }
}

/// POST /api/subjects
pub async fn create_subject(
    State(state): State<AppState>,
    payload: Result<Json<CreateSubjectRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/subjects");
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.subject_service.create_subject(request).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => error_response(e, "Failed to create subject"),
    }
}
