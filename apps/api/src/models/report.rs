use serde::{Deserialize, Serialize};

/// AI-written summary of this tool. At most one is held at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReportData {
    pub introduction: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub tools_used: Vec<String>,
    pub steps_involved: Vec<String>,
    pub conclusion: String,
}
