//! LLM module for the summariser
//!
//! Turns a transcript into a summary using Claude on AWS Bedrock.

mod bedrock;
mod client;
mod prompts;

pub use bedrock::{classify_service_error, parse_summary, BedrockClient, InvokeRequest};
pub use client::{build_provider, LlmProvider, SummaryRequest};
pub use prompts::build_summary_prompt;
