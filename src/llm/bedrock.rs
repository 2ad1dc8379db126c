use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{LlmProvider, SummaryRequest};
use crate::llm::prompts::build_summary_prompt;
use crate::{Result, SummariserError};

const JSON_CONTENT_TYPE: &str = "application/json";

pub struct BedrockClient {
    client: Client,
    credentials: Option<SharedCredentialsProvider>,
    model_id: String,
    anthropic_version: String,
}

impl BedrockClient {
    /// Load the ambient AWS configuration pinned to the configured region.
    ///
    /// Credentials are resolved lazily, on the first request. SDK retries are
    /// disabled: every invocation is exactly one attempt.
    pub async fn from_settings(settings: &Settings) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.bedrock.region.clone()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        tracing::debug!(
            region = %settings.bedrock.region,
            model = %settings.bedrock.model_id,
            "bedrock client configured"
        );

        Self {
            client: Client::new(&shared),
            credentials: shared.credentials_provider(),
            model_id: settings.bedrock.model_id.clone(),
            anthropic_version: settings.bedrock.anthropic_version.clone(),
        }
    }

    async fn ensure_credentials(&self) -> Result<()> {
        let provider = self.credentials.as_ref().ok_or_else(|| {
            SummariserError::Credentials("no credentials provider configured".to_string())
        })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| SummariserError::Credentials(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl LlmProvider for BedrockClient {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        self.ensure_credentials().await?;

        let body = InvokeRequest::new(
            &self.anthropic_version,
            request.max_tokens,
            build_summary_prompt(request.transcript),
        );
        let body = serde_json::to_vec(&body)
            .map_err(|e| SummariserError::InvalidRequest(format!("request encoding: {e}")))?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(map_invoke_error)?;

        parse_summary(response.body().as_ref())
    }
}

fn map_invoke_error<R: std::fmt::Debug + 'static>(err: SdkError<InvokeModelError, R>) -> SummariserError {
    let code = err
        .as_service_error()
        .and_then(|e| e.code())
        .map(str::to_string);
    let message = DisplayErrorContext(&err).to_string();
    tracing::debug!(code = ?code, "bedrock invocation failed");
    classify_service_error(code.as_deref(), message)
}

/// Map a Bedrock error code onto the operator-facing failure category.
pub fn classify_service_error(code: Option<&str>, message: String) -> SummariserError {
    match code {
        Some("AccessDeniedException") => SummariserError::AccessDenied(message),
        Some("ValidationException") | Some("ModelInvocationException") => {
            SummariserError::InvalidRequest(message)
        }
        Some("UnrecognizedClientException")
        | Some("ExpiredTokenException")
        | Some("InvalidSignatureException") => SummariserError::Credentials(message),
        _ => SummariserError::Service(message),
    }
}

/// Extract `content[0].text` from a Messages API response body.
pub fn parse_summary(body: &[u8]) -> Result<String> {
    let payload: InvokeResponse = serde_json::from_slice(body)
        .map_err(|e| SummariserError::MalformedResponse(format!("invalid response body: {e}")))?;

    payload
        .content
        .into_iter()
        .next()
        .ok_or_else(|| SummariserError::MalformedResponse("response has no content".to_string()))?
        .text
        .ok_or_else(|| {
            SummariserError::MalformedResponse("first content block has no text".to_string())
        })
}

/// Anthropic Messages request body as accepted by Bedrock's `InvokeModel`.
#[derive(Debug, Serialize)]
pub struct InvokeRequest<'a> {
    anthropic_version: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

impl<'a> InvokeRequest<'a> {
    pub fn new(anthropic_version: &'a str, max_tokens: u32, prompt: String) -> Self {
        Self {
            anthropic_version,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}
