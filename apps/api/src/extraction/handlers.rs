//! Axum route handlers for the Resume API.

use std::path::Path as FsPath;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::upload::{BatchSummary, UploadOrchestrator, UploadedFile};
use crate::models::resume::ParsedResume;
use crate::state::AppState;
use crate::store::export::EXPORT_FILE_NAME;

/// Multipart field carrying resume files. Repeat it once per file.
const FILES_FIELD: &str = "files";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub summary: BatchSummary,
    pub resumes: Vec<ParsedResume>,
}

/// POST /api/v1/resumes/upload
///
/// Reads every `files` part, then runs the batch to completion before
/// responding. The response carries the full collection after the batch.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let files = read_files(multipart).await?;

    let summary = UploadOrchestrator::new(state.session.clone(), state.extractor.clone())
        .process_batch(files)
        .await?;

    let resumes = state.session.resumes.read().await.all().cloned().collect();
    Ok(Json(UploadResponse { summary, resumes }))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<Vec<ParsedResume>> {
    let resumes = state.session.resumes.read().await.all().cloned().collect();
    Json(resumes)
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParsedResume>, AppError> {
    let resume = state.session.resumes.read().await.get(id).cloned();
    resume
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// DELETE /api/v1/resumes/:id
///
/// Always 204: removing an unknown id is a no-op.
pub async fn handle_remove_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.session.resumes.write().await.remove_by_id(id) {
        info!("Removed resume {id}");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/resumes/export
///
/// CSV attachment of every held record; 204 with no body when there are none.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let csv = state.session.resumes.read().await.export_delimited()?;

    let Some(csv) = csv else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv;charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

async fn read_files(mut multipart: Multipart) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let display_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("unnamed file #{}", files.len() + 1));
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .filter(|m| m != "application/octet-stream")
            .or_else(|| guess_mime_type(&display_name).map(str::to_string))
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let content = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&format!("Failed to read {display_name}"), e))?;

        files.push(UploadedFile {
            content,
            mime_type,
            display_name,
        });
    }

    Ok(files)
}

fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", e.body_text()))
    } else {
        AppError::Validation(format!("{context}: {}", e.body_text()))
    }
}

/// Falls back to the file extension when the client sent no usable type.
fn guess_mime_type(file_name: &str) -> Option<&'static str> {
    let extension = FsPath::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())?
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}
