//! Report collaborator: produces a free-text summary of this tool. No input.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::prompts::with_json_only;
use crate::llm_client::{LlmCall, LlmClient};
use crate::models::report::ProjectReportData;
use crate::report::prompts::{report_response_schema, REPORT_PROMPT, REPORT_ROLE};

#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate_project_report(&self) -> Result<ProjectReportData, AppError>;
}

pub struct GeminiReportGenerator {
    llm: LlmClient,
    system: String,
}

impl GeminiReportGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: with_json_only(REPORT_ROLE),
        }
    }
}

#[async_trait]
impl ReportGenerator for GeminiReportGenerator {
    async fn generate_project_report(&self) -> Result<ProjectReportData, AppError> {
        let schema = report_response_schema();
        let call = LlmCall {
            system: &self.system,
            prompt: REPORT_PROMPT,
            attachment: None,
            response_schema: Some(&schema),
        };

        self.llm
            .call_json::<ProjectReportData>(call)
            .await
            .map_err(|e| AppError::Llm(format!("Project report generation failed: {e}")))
    }
}
