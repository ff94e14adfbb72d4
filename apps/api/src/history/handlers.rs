use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::notify::Notice;
use crate::state::AppState;
use crate::view::{AnalysisDetailView, HistoryListView};

/// GET /api/v1/analyses
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<HistoryListView>, AppError> {
    let records = state.history.load().await;
    Ok(Json(HistoryListView::from_records(&records)))
}

/// GET /api/v1/analyses/:id
pub async fn handle_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisDetailView>, AppError> {
    let records = state.history.load().await;
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;
    Ok(Json(AnalysisDetailView::from_record(record)))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub notice: Notice,
}

/// DELETE /api/v1/analyses/:id
///
/// Removal is idempotent: deleting an id that is already gone still
/// returns 200 with the confirmation notice.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.history.remove(&id).await?;
    let notice = Notice::analysis_deleted();
    state.notifier.notify(&notice);
    Ok(Json(DeleteResponse { notice }))
}
