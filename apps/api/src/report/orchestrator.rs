//! Report orchestration: one collaborator call with a busy flag.
//!
//! Success replaces the held report wholesale. Failure leaves the held
//! report exactly as it was and raises a single notice.

use std::sync::Arc;

use anyhow::anyhow;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::report::ProjectReportData;
use crate::report::generator::ReportGenerator;
use crate::session::Session;

pub const REPORT_FAILURE_NOTICE: &str = "Failed to generate project report. Please try again.";

#[derive(Clone)]
pub struct ReportOrchestrator {
    session: Arc<Session>,
    generator: Arc<dyn ReportGenerator>,
}

impl ReportOrchestrator {
    pub fn new(session: Arc<Session>, generator: Arc<dyn ReportGenerator>) -> Self {
        Self { session, generator }
    }

    /// Returns the newly held report, or `None` when generation failed.
    /// `Conflict` if a report call is already in flight.
    ///
    /// The call runs on its own task and completes even if the caller goes away.
    pub async fn generate(&self) -> Result<Option<ProjectReportData>, AppError> {
        let busy = self
            .session
            .try_begin_report()
            .ok_or_else(|| AppError::Conflict("A project report is already being generated".to_string()))?;

        let worker = self.clone();
        let call = tokio::spawn(async move {
            let _busy = busy;
            worker.run().await
        });

        call.await
            .map_err(|e| AppError::Internal(anyhow!("Report task failed: {e}")))
    }

    async fn run(&self) -> Option<ProjectReportData> {
        info!("Generating project report");
        match self.generator.generate_project_report().await {
            Ok(report) => {
                *self.session.report.write().await = Some(report.clone());
                info!("Project report generated");
                Some(report)
            }
            Err(e) => {
                error!("Error generating report: {e}");
                self.session.notices.write().await.error(REPORT_FAILURE_NOTICE);
                None
            }
        }
    }

    pub async fn current(&self) -> Option<ProjectReportData> {
        self.session.report.read().await.clone()
    }

    /// Discards the held report. Returns whether one was held.
    pub async fn dismiss(&self) -> bool {
        self.session.report.write().await.take().is_some()
    }
}
