// LLM prompt templates and output schema for resume extraction.

use serde_json::{json, Value};

/// Role half of the extraction system prompt; the JSON-only fragment is appended at call time.
pub const RESUME_PARSE_ROLE: &str = "You are a precise resume data extractor. \
    You read resumes supplied as PDF documents or images and return their contents as structured data. \
    Never invent information that is not visible in the document.";

pub const RESUME_PARSE_PROMPT: &str = r#"Extract the candidate's information from the attached resume.

RULES:
1. contactInfo: fullName, email, phone and location exactly as written; use "" when absent.
   links: every URL or profile handle (LinkedIn, GitHub, portfolio), in document order.
2. summary: the candidate's own summary or objective. If there is none, write two sentences
   describing the candidate using only facts from the document.
3. education and experience: one entry per item, in the order they appear.
   Dates stay as written ("Jan 2020", "2019", "Present").
4. experience.highlights: one string per bullet point, in order.
5. skills: individual skills as short strings, deduplicated, in the order they first appear.
6. Return ONLY the JSON object."#;

/// Gemini `responseSchema` mirroring `ResumeProcessingResult`.
pub fn resume_response_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "contactInfo": {
                "type": "OBJECT",
                "properties": {
                    "fullName": string,
                    "email": string,
                    "phone": string,
                    "location": string,
                    "links": string_list
                },
                "required": ["fullName", "email", "phone", "location", "links"]
            },
            "summary": string,
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "institution": string,
                        "degree": string,
                        "fieldOfStudy": string,
                        "startDate": string,
                        "endDate": string,
                        "description": string
                    },
                    "required": ["institution", "degree", "fieldOfStudy", "startDate", "endDate"]
                }
            },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "company": string,
                        "position": string,
                        "startDate": string,
                        "endDate": string,
                        "location": string,
                        "highlights": string_list
                    },
                    "required": ["company", "position", "startDate", "endDate", "location", "highlights"]
                }
            },
            "skills": string_list
        },
        "required": ["contactInfo", "summary", "education", "experience", "skills"]
    })
}
