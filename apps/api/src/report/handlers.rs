//! Axum route handlers for the Project Report API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::report::ProjectReportData;
use crate::report::orchestrator::ReportOrchestrator;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    /// Whether this call produced a new report.
    pub generated: bool,
    /// The report held after the call; the previous one if generation failed.
    pub report: Option<ProjectReportData>,
}

/// POST /api/v1/report
///
/// Generation failures are not HTTP errors: the response reports
/// `generated: false` and a notice is raised.
pub async fn handle_generate_report(
    State(state): State<AppState>,
) -> Result<Json<GenerateReportResponse>, AppError> {
    let orchestrator = ReportOrchestrator::new(state.session.clone(), state.reporter.clone());
    let response = match orchestrator.generate().await? {
        Some(report) => GenerateReportResponse {
            generated: true,
            report: Some(report),
        },
        None => GenerateReportResponse {
            generated: false,
            report: orchestrator.current().await,
        },
    };
    Ok(Json(response))
}

/// GET /api/v1/report
pub async fn handle_get_report(
    State(state): State<AppState>,
) -> Result<Json<ProjectReportData>, AppError> {
    let report = state.session.report.read().await.clone();
    report
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No project report has been generated".to_string()))
}

/// DELETE /api/v1/report
pub async fn handle_dismiss_report(State(state): State<AppState>) -> StatusCode {
    ReportOrchestrator::new(state.session, state.reporter)
        .dismiss()
        .await;
    StatusCode::NO_CONTENT
}
