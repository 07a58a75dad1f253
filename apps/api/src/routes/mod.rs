pub mod health;
pub mod status;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as resumes;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", get(resumes::handle_list_resumes))
        .route(
            "/api/v1/resumes/upload",
            post(resumes::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/export", get(resumes::handle_export))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_remove_resume),
        )
        // Project report API
        .route(
            "/api/v1/report",
            get(report::handle_get_report)
                .post(report::handle_generate_report)
                .delete(report::handle_dismiss_report),
        )
        // Session
        .route("/api/v1/status", get(status::handle_status))
        .route(
            "/api/v1/notices",
            get(status::handle_list_notices).delete(status::handle_clear_notices),
        )
        .with_state(state)
}
