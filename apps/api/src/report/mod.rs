// Project report: a single-shot model call whose result replaces the held report.

pub mod generator;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
