//! summariser - Summarize meeting transcripts with Claude on AWS Bedrock
//!
//! Entry point for the summariser CLI application.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transcript_summariser::cli::Cli;
use transcript_summariser::config::Settings;
use transcript_summariser::SummariserError;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Failures are reported on stdout, alongside the progress messages.
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<SummariserError>() {
                Some(err) => println!("{}", err),
                None => println!("{:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        transcript_summariser::cli::completions::write_completions(shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(input) = cli.input else {
        anyhow::bail!("Error: missing input transcript path");
    };

    // Load configuration only when a transcript is processed.
    let settings = Settings::load()?;

    transcript_summariser::cli::commands::summarise_transcript(
        &settings,
        &input,
        cli.output.as_deref(),
        cli.max_tokens,
    )
    .await?;

    Ok(())
}
