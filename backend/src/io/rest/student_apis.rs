//! # REST API for Students
//!
//! The only entity with get, update and delete by key.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{CreateStudentRequest, MessageResponse, UpdateStudentRequest};
use tracing::info;

use super::{error_response, json_body};
use crate::AppState;

/// GET /api/students
pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/students");

    match state.student_service.list_students().await {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(e) => error_response(e, "Failed to fetch students"),
    }
}

/// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/students");
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.student_service.create_student(request).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => error_response(e, "Failed to create student"),
    }
}

/// GET /api/students/:usn
pub async fn get_student(State(state): State<AppState>, Path(usn): Path<String>) -> impl IntoResponse {
    info!("GET /api/students/{}", usn);

    match state.student_service.get_student(&usn).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => error_response(e, "Failed to fetch student"),
    }
}

/// PATCH /api/students/:usn
pub async fn update_student(
    State(state): State<AppState>,
    Path(usn): Path<String>,
    payload: Result<Json<UpdateStudentRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("PATCH /api/students/{}", usn);
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.student_service.update_student(&usn, request).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => error_response(e, "Failed to update student"),
    }
}

/// DELETE /api/students/:usn
pub async fn delete_student(State(state): State<AppState>, Path(usn): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/students/{}", usn);

    match state.student_service.delete_student(&usn).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Student deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e, "Failed to delete student"),
    }
}
