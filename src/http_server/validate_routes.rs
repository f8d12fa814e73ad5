//! Validation HTTP Routes
//!
//! `POST /validate` takes a multipart request with a `file` part (the CSV
//! upload, with a file name) and a `schema` part (schema JSON text).
//! Every readable request is answered 200 with a verdict.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};
use tracing::warn;
use uuid::Uuid;

use super::errors::{UploadError, UploadResult};
use crate::observability::Event;
use crate::validator::{GuardError, ValidationResult, ValidationService};

/// Validation state shared across handlers
pub struct ValidateState {
    pub service: ValidationService,
}

impl ValidateState {
    pub fn new(service: ValidationService) -> Self {
        Self { service }
    }
}

/// Parts extracted from the multipart body
struct Upload {
    file_name: Option<String>,
    content: Bytes,
    schema_json: String,
}

/// Create validation routes
pub fn validate_routes(state: Arc<ValidateState>) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .with_state(state)
}

async fn validate_handler(
    State(state): State<Arc<ValidateState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> UploadResult<Json<ValidationResult>> {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(err) => {
            warn!(event = %Event::UploadRejected, status = err.status_code().as_u16(), error = %err);
            return Err(err);
        }
    };

    // Parsing and validation are CPU-bound; keep them off the async workers.
    let service = state.service.clone();
    let verdict = tokio::task::spawn_blocking(move || {
        service.validate_upload(
            upload.file_name.as_deref(),
            &upload.content,
            &upload.schema_json,
        )
    })
    .await;

    let result = match verdict {
        Ok(result) => result,
        Err(join_err) => state
            .service
            .reject(Uuid::new_v4(), &GuardError::Internal(join_err.to_string())),
    };

    Ok(Json(result))
}

async fn read_upload(multipart: Result<Multipart, MultipartRejection>) -> UploadResult<Upload> {
    let mut multipart = multipart?;
    let mut file: Option<(Option<String>, Bytes)> = None;
    let mut schema_json: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content = field.bytes().await?;
                file = Some((file_name, content));
            }
            Some("schema") => {
                schema_json = Some(field.text().await?);
            }
            // Unknown parts are ignored
            _ => {}
        }
    }

    let (file_name, content) = file.ok_or(UploadError::MissingPart("file"))?;
    let schema_json = schema_json.ok_or(UploadError::MissingPart("schema"))?;

    Ok(Upload {
        file_name,
        content,
        schema_json,
    })
}
