//! # REST API for Data Export
//!
//! Streams the student roster as a CSV attachment.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;

use super::error_response;
use crate::AppState;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// GET /api/export/students
pub async fn export_students(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export/students");

    let export = match state.export_service.students_csv(Utc::now().date_naive()).await {
        Ok(export) => export,
        Err(e) => return error_response(e, "Failed to export students"),
    };

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    let disposition = match HeaderValue::from_str(&disposition) {
        Ok(value) => value,
        Err(_) => HeaderValue::from_static("attachment"),
    };

    info!("Exported {} bytes as {}", export.content.len(), export.filename);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response()
}
