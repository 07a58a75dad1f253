use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    /// Bullet points, in the order they appear on the resume.
    pub highlights: Vec<String>,
}

/// Structured fields returned by the extraction collaborator for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProcessingResult {
    pub contact_info: ContactInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<WorkExperience>,
    pub skills: Vec<String>,
}

/// Lifecycle tag of a record. Only `Completed` is stored today: failed
/// extractions never produce a record.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

/// One record in the session's result collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub id: Uuid,
    pub file_name: String,
    pub status: ResumeStatus,
    pub contact_info: ContactInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<WorkExperience>,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl ParsedResume {
    /// Stamps a successful extraction as a `completed` record.
    pub fn completed(id: Uuid, file_name: impl Into<String>, result: ResumeProcessingResult) -> Self {
        let ResumeProcessingResult {
            contact_info,
            summary,
            education,
            experience,
            skills,
        } = result;

        Self {
            id,
            file_name: file_name.into(),
            status: ResumeStatus::Completed,
            contact_info,
            summary,
            education,
            experience,
            skills,
            raw_text: None,
        }
    }
}
