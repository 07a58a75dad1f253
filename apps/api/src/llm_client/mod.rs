//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All model interactions MUST go through this module.
//!
//! Every call is a single attempt. Callers decide what a failure means.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all extraction and report calls.
pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Binary payload sent alongside the prompt (a PDF page set or an image).
#[derive(Debug, Clone, Copy)]
pub struct Attachment<'a> {
    pub mime_type: &'a str,
    pub data: &'a [u8],
}

/// One request to the model.
#[derive(Debug, Clone, Copy)]
pub struct LlmCall<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub attachment: Option<Attachment<'a>>,
    /// OpenAPI-subset schema the model's JSON output must follow.
    pub response_schema: Option<&'a Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Blob {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by all services.
/// Wraps the Gemini `generateContent` API with structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Option<Duration>) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_key,
        })
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(&self, call: LlmCall<'_>) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(&call);
        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}, finish_reason={:?}",
                usage.prompt_token_count,
                usage.candidates_token_count,
                llm_response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
            );
        }

        Ok(llm_response)
    }

    /// Calls the model and deserializes the text response as JSON.
    /// The call should carry a response schema or a prompt that demands JSON.
    pub async fn call_json<T: DeserializeOwned>(&self, call: LlmCall<'_>) -> Result<T, LlmError> {
        let response = self.call(call).await?;
        decode_json(&response)
    }
}

fn build_request<'a>(call: &LlmCall<'a>) -> GenerateContentRequest<'a> {
    let mut parts = Vec::with_capacity(2);
    if let Some(attachment) = call.attachment {
        parts.push(Part::InlineData {
            inline_data: Blob {
                mime_type: attachment.mime_type.to_string(),
                data: STANDARD.encode(attachment.data),
            },
        });
    }
    parts.push(Part::Text {
        text: call.prompt.to_string(),
    });

    GenerateContentRequest {
        system_instruction: SystemInstruction {
            parts: [TextPart { text: call.system }],
        },
        contents: vec![Content {
            role: "user",
            parts,
        }],
        generation_config: call.response_schema.map(|schema| GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema,
        }),
    }
}

fn decode_json<T: DeserializeOwned>(response: &LlmResponse) -> Result<T, LlmError> {
    let text = response.text().ok_or(LlmError::EmptyContent)?;

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
