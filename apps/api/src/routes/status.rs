use axum::{extract::State, Json};
use serde::Serialize;

use crate::notices::Notice;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub is_uploading: bool,
    pub is_generating_report: bool,
    pub resume_count: usize,
    pub has_report: bool,
}

/// GET /api/v1/status
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let session = &state.session;
    let resume_count = session.resumes.read().await.len();
    let has_report = session.report.read().await.is_some();

    Json(StatusResponse {
        is_uploading: session.is_uploading(),
        is_generating_report: session.is_generating_report(),
        resume_count,
        has_report,
    })
}

/// GET /api/v1/notices
pub async fn handle_list_notices(State(state): State<AppState>) -> Json<Vec<Notice>> {
    let notices = state.session.notices.read().await.list();
    Json(notices)
}

#[derive(Debug, Serialize)]
pub struct ClearNoticesResponse {
    pub cleared: usize,
}

/// DELETE /api/v1/notices
pub async fn handle_clear_notices(State(state): State<AppState>) -> Json<ClearNoticesResponse> {
    let cleared = state.session.notices.write().await.clear();
    Json(ClearNoticesResponse { cleared })
}
