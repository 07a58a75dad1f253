// LLM prompt templates and output schema for the project report.

use serde_json::{json, Value};

pub const REPORT_ROLE: &str = "You are a technical writer documenting a software project for a project report.";

pub const REPORT_PROMPT: &str = r#"Write a project report for "Smart Resume Parser", a tool that:
- accepts resume files as PDFs or images, one batch at a time;
- sends each file, in order, to a multimodal generative AI model that extracts contact details,
  a summary, education, work experience and skills as structured JSON;
- keeps every parsed resume in memory for review, detail view and removal;
- exports the parsed candidates as a CSV file (name, email, phone, location, skills).

Fill every field:
- introduction: one paragraph on the problem of manual resume screening.
- abstract: one paragraph summarising the approach and outcome.
- toolsUsed: the technologies involved, one per entry.
- stepsInvolved: the processing pipeline from upload to export, one step per entry, in order.
- conclusion: one paragraph on results and possible extensions."#;

/// Gemini `responseSchema` mirroring `ProjectReportData`.
pub fn report_response_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "introduction": string,
            "abstract": string,
            "toolsUsed": string_list,
            "stepsInvolved": string_list,
            "conclusion": string
        },
        "required": ["introduction", "abstract", "toolsUsed", "stepsInvolved", "conclusion"]
    })
}
