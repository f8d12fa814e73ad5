//! # Upload Errors
//!
//! Failures reading the multipart request itself. These are the only
//! failures answered with an error status; everything past a readable
//! request becomes a 200 verdict.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for upload extraction
pub type UploadResult<T> = Result<T, UploadError>;

/// Multipart request errors
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// A required part is not present
    #[error("Missing multipart part: '{0}'")]
    MissingPart(&'static str),

    /// Request is not multipart, or its stream could not be read
    #[error("Invalid multipart request: {message}")]
    Multipart { status: StatusCode, message: String },
}

impl UploadError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingPart(_) => StatusCode::BAD_REQUEST,
            UploadError::Multipart { status, .. } => *status,
        }
    }
}

impl From<MultipartError> for UploadError {
    fn from(e: MultipartError) -> Self {
        UploadError::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<MultipartRejection> for UploadError {
    fn from(e: MultipartRejection) -> Self {
        UploadError::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<UploadError> for ErrorResponse {
    fn from(err: UploadError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
