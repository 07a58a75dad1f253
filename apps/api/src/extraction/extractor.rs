//! Extraction collaborator: turns one resume file into structured fields.
//!
//! `AppState` holds an `Arc<dyn ResumeExtractor>`; production wires in
//! `GeminiResumeExtractor`, tests use scripted fakes.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::prompts::{resume_response_schema, RESUME_PARSE_PROMPT, RESUME_PARSE_ROLE};
use crate::llm_client::prompts::with_json_only;
use crate::llm_client::{Attachment, LlmCall, LlmClient};
use crate::models::resume::ResumeProcessingResult;

/// Returns the full result shape or fails. Partial results are not supported.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn parse_resume(
        &self,
        file_content: &[u8],
        mime_type: &str,
    ) -> Result<ResumeProcessingResult, AppError>;
}

/// Sends the file inline to Gemini and decodes the structured reply.
pub struct GeminiResumeExtractor {
    llm: LlmClient,
    system: String,
}

impl GeminiResumeExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: with_json_only(RESUME_PARSE_ROLE),
        }
    }
}

#[async_trait]
impl ResumeExtractor for GeminiResumeExtractor {
    async fn parse_resume(
        &self,
        file_content: &[u8],
        mime_type: &str,
    ) -> Result<ResumeProcessingResult, AppError> {
        let schema = resume_response_schema();
        let call = LlmCall {
            system: &self.system,
            prompt: RESUME_PARSE_PROMPT,
            attachment: Some(Attachment {
                mime_type,
                data: file_content,
            }),
            response_schema: Some(&schema),
        };

        self.llm
            .call_json::<ResumeProcessingResult>(call)
            .await
            .map_err(|e| AppError::Llm(format!("Resume extraction failed: {e}")))
    }
}
