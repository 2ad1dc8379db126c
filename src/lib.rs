//! transcript-summariser - Summarize meeting transcripts with Claude on AWS Bedrock
//!
//! Reads a `.txt` transcript, asks the model for a summary and writes it to a
//! timestamped text file next to the input (or to an explicit path).

pub mod cli;
pub mod config;
pub mod llm;
pub mod output;
pub mod transcript;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the summariser
#[derive(Error, Debug)]
pub enum SummariserError {
    #[error("Error: Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Error: Input file must be a .txt file")]
    NotTextFile(PathBuf),

    #[error("Error reading .txt file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: No text content found in the document")]
    EmptyTranscript(PathBuf),

    #[error(
        "AWS credentials not found. Please configure your AWS credentials.\n   You can use: aws configure\n   ({0})"
    )]
    Credentials(String),

    #[error("Access denied. Please check your AWS permissions for Bedrock.")]
    AccessDenied(String),

    #[error("Model invocation failed. Please check the input format. ({0})")]
    InvalidRequest(String),

    #[error("AWS Bedrock error: {0}")]
    Service(String),

    #[error("Error during summarization: {0}")]
    MalformedResponse(String),

    #[error("Error saving summary to .txt: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SummariserError>;

