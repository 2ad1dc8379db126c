//! CLI command implementations

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::llm::{build_provider, LlmProvider, SummaryRequest};
use crate::output::{output_path, run_timestamp, write_summary};
use crate::transcript::load_transcript;
use crate::Result;

/// Summarise one transcript with the configured Bedrock model.
///
/// Returns the path the summary was written to.
pub async fn summarise_transcript(
    settings: &Settings,
    input: &Path,
    output: Option<&Path>,
    max_tokens: Option<u32>,
) -> Result<PathBuf> {
    let provider = build_provider(settings).await;
    let max_tokens = max_tokens.unwrap_or(settings.bedrock.max_tokens);

    run_pipeline(provider.as_ref(), input, output, max_tokens, Local::now()).await
}

/// Loader, client and writer in sequence. Every failure ends the run and
/// nothing is written unless the model returned a summary.
pub async fn run_pipeline(
    provider: &dyn LlmProvider,
    input: &Path,
    output: Option<&Path>,
    max_tokens: u32,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let destination = output_path(input, output, &run_timestamp(now));

    println!("Reading transcript from: {}", input.display());
    let transcript = load_transcript(input)?;
    println!("Extracted {} characters of text", transcript.char_count());

    println!("Sending content to AWS Bedrock for summarization...");
    let summary = provider
        .summarize(SummaryRequest {
            transcript: transcript.as_str(),
            max_tokens,
        })
        .await?;
    println!("{}", summary);
    println!("Summarization completed successfully!");

    write_summary(&summary, &destination)?;
    println!("Summary saved to: {}", destination.display());

    println!("Process completed successfully!");
    println!("   Input: {}", input.display());
    println!("   Output: {}", destination.display());

    Ok(destination)
}
