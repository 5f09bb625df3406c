//! REST API for classes (year, section, semester).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::CreateClassRequest;
use tracing::info;

use super::{error_response, json_body};
use crate::AppState;

/// GET /api/classes
pub async fn list_classes(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/classes");

    match state.class_service.list_classes().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Failed to fetch classes"),
    }
}

/// POST /api/classes
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/classes");
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.class_service.create_class(request).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => error_response(e, "Failed to create class"),
    }
}
