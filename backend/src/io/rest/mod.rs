//! # REST API Interface Layer
//!
//! Translates HTTP requests into domain service calls and domain errors into
//! status codes:
//!
//! - `NotFound` → 404 with `{error: "<Entity> not found"}`
//! - `MissingFields` or an unreadable JSON body → 400 with `{error: "Missing required fields"}`
//! - anything else → 500 with a generic `"Failed to ..."` message; the cause is only logged

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::error::RecordsError;

pub mod assignment_apis;
pub mod class_apis;
pub mod export_apis;
pub mod faculty_apis;
pub mod logging_apis;
pub mod mark_apis;
pub mod stats_apis;
pub mod student_apis;
pub mod subject_apis;

pub use assignment_apis::*;
pub use class_apis::*;
pub use export_apis::*;
pub use faculty_apis::*;
pub use logging_apis::*;
pub use mark_apis::*;
pub use stats_apis::*;
pub use student_apis::*;
pub use subject_apis::*;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// JSON error body with the given status
pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Map a domain error to its HTTP response; `failure` is the 500 message
pub fn error_response(err: RecordsError, failure: &str) -> Response {
    match err {
        RecordsError::NotFound(_) => error_body(StatusCode::NOT_FOUND, err.to_string()),
        RecordsError::MissingFields(ref fields) => {
            warn!("Rejected request, missing fields: {:?}", fields);
            error_body(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
        }
        RecordsError::Database(_) | RecordsError::Export(_) => {
            error!("{}: {}", failure, err);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

/// Unwrap a JSON body, answering 400 when it is missing or malformed
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(error_body(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            error_response(RecordsError::NotFound("Student"), "Failed").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(RecordsError::MissingFields(vec!["name"]), "Failed").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(RecordsError::Database(sqlx::Error::RowNotFound), "Failed").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
