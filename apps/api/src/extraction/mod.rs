// Resume extraction: intake, per-file collaborator calls, and the Resume API.
// All model calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod upload;
