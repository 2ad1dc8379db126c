//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// summariser - Summarize a Teams transcript (.txt) using AWS Bedrock
#[derive(Parser, Debug)]
#[command(name = "summariser")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  summariser transcript.txt\n  summariser transcript.txt -o summary.txt")]
pub struct Cli {
    /// Path to the input .txt transcript file
    #[arg(required_unless_present = "completions")]
    pub input: Option<PathBuf>,

    /// Path for the output .txt file (default: <input>_summary_<timestamp>.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of tokens for the summary (overrides config)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}
