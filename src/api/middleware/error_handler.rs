//! Error handler for converting AppError to HTTP responses.
//!
//! Clients only ever see the status code. The error itself, with its cause
//! chain, stays in the server log.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, ErrorKind};

impl IntoResponse for AppError {
    /// Converts an AppError into a body-less HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Conflict → 409 CONFLICT
    /// - BadRequest → 400 BAD_REQUEST
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        status.into_response()
    }
}

/// Maps an error kind to its HTTP status code.
pub fn kind_to_status_code(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    kind_to_status_code(error.kind())
}

/// Converts an axum JSON rejection into a bad request.
///
/// Syntax errors, type mismatches, a missing content type and unreadable
/// bodies are all reported as 400.
pub fn handle_json_rejection(rejection: JsonRejection) -> AppError {
    AppError::bad_request(rejection.body_text())
}
