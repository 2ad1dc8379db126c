use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::bedrock::BedrockClient;
use crate::Result;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub transcript: &'a str,
    pub max_tokens: u32,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String>;
}

/// Build the Bedrock-backed provider from runtime settings.
pub async fn build_provider(settings: &Settings) -> Box<dyn LlmProvider> {
    Box::new(BedrockClient::from_settings(settings).await)
}
