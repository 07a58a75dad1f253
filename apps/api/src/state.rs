use std::sync::Arc;

use crate::config::Config;
use crate::extraction::extractor::ResumeExtractor;
use crate::report::generator::ReportGenerator;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory session: results, held report, notices, busy flags.
    pub session: Arc<Session>,
    /// Extraction collaborator. Default: `GeminiResumeExtractor`.
    pub extractor: Arc<dyn ResumeExtractor>,
    /// Report collaborator. Default: `GeminiReportGenerator`.
    pub reporter: Arc<dyn ReportGenerator>,
    pub config: Config,
}
