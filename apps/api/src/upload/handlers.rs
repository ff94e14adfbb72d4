use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::notify::Notice;
use crate::state::AppState;
use crate::upload::validate::{IncomingUpload, ValidationError};
use crate::view::AnalysisDetailView;

#[derive(Serialize)]
pub struct UploadResponse {
    pub notice: Notice,
    pub analysis: AnalysisDetailView,
}

/// POST /api/v1/analyses
///
/// Multipart upload; the first file field wins and the rest are ignored.
/// Drives the whole flow synchronously, so the response carries the
/// finished analysis.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let upload = first_file(&mut multipart).await?;
    let record = state
        .upload_flow
        .run(upload, &state.history, state.notifier.as_ref())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            notice: Notice::analysis_complete(),
            analysis: AnalysisDetailView::from_record(&record),
        }),
    ))
}

/// GET /api/v1/uploads/status
pub async fn handle_upload_status(
    State(state): State<AppState>,
) -> Json<crate::upload::progress::UploadStatus> {
    Json(state.upload_flow.current_status())
}

async fn first_file(multipart: &mut Multipart) -> Result<IncomingUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(IncomingUpload {
            file_name,
            content_type,
            size_bytes: data.len() as u64,
        });
    }
    Err(AppError::Validation(ValidationError::MissingFile.to_string()))
}
